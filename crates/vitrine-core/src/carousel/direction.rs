//! Direction adapter: maps the user's "next"/"previous" onto physical
//! track motion. The right-to-left inversion lives here and nowhere
//! else; index arithmetic never sees text direction.

use serde::{Deserialize, Serialize};

/// Layout direction of a section. Fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Physical motion along the slide track, independent of layout
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Forward,
    Backward,
}

impl Motion {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Motion::Forward => Motion::Backward,
            Motion::Backward => Motion::Forward,
        }
    }
}

impl Direction {
    /// Map a semantic navigation motion onto physical track motion.
    #[inline]
    pub fn physical(self, motion: Motion) -> Motion {
        match self {
            Direction::Ltr => motion,
            Direction::Rtl => motion.reversed(),
        }
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}
