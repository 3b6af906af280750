//! The slide track: an ordered, immutable item list plus the
//! breakpoint table that decides how many items one navigation step
//! covers at a given viewport width.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fallback group size when no breakpoint matches (mobile-first).
const DEFAULT_GROUP_SIZE: usize = 1;

/// A responsive breakpoint: at viewport widths of at least `min_width`
/// columns, navigation advances `group_size` items per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u16,
    pub group_size: usize,
}

/// The ordered item list a carousel cycles through.
///
/// Items are opaque payloads; the engine never inspects their contents.
/// The list is immutable for the lifetime of one mounted engine
/// instance - when upstream data changes, the owning section mounts a
/// fresh engine instead of mutating this one.
#[derive(Debug, Clone)]
pub struct SlideTrack<T> {
    items: Vec<T>,
    breakpoints: Vec<Breakpoint>,
}

impl<T> SlideTrack<T> {
    /// Build a track from an item list and a breakpoint table.
    ///
    /// The table may be empty (every width then resolves to a group
    /// size of 1). Fails on an empty item list or a zero group size.
    pub fn new(items: Vec<T>, mut breakpoints: Vec<Breakpoint>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::Config(
                "slide track requires at least one item".to_string(),
            ));
        }
        if let Some(bp) = breakpoints.iter().find(|bp| bp.group_size == 0) {
            return Err(Error::Config(format!(
                "breakpoint at min_width {} has a zero group size",
                bp.min_width
            )));
        }
        breakpoints.sort_by_key(|bp| bp.min_width);
        Ok(Self { items, breakpoints })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed track; construction rejects
    /// empty item lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of items advanced per navigation step at the given
    /// viewport width: the largest breakpoint whose threshold fits.
    pub fn group_size_for(&self, width: u16) -> usize {
        self.breakpoints
            .iter()
            .rev()
            .find(|bp| bp.min_width <= width)
            .map(|bp| bp.group_size)
            .unwrap_or(DEFAULT_GROUP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_breakpoints() -> Vec<Breakpoint> {
        vec![
            Breakpoint { min_width: 0, group_size: 1 },
            Breakpoint { min_width: 768, group_size: 2 },
            Breakpoint { min_width: 1024, group_size: 3 },
            Breakpoint { min_width: 1280, group_size: 4 },
        ]
    }

    #[test]
    fn test_group_size_lookup() {
        let track = SlideTrack::new(vec![(); 8], roster_breakpoints()).unwrap();
        assert_eq!(track.group_size_for(100), 1);
        assert_eq!(track.group_size_for(800), 2);
        assert_eq!(track.group_size_for(1024), 3);
        assert_eq!(track.group_size_for(2000), 4);
    }

    #[test]
    fn test_group_size_fallback_without_matching_breakpoint() {
        let track = SlideTrack::new(
            vec![(); 3],
            vec![Breakpoint { min_width: 768, group_size: 2 }],
        )
        .unwrap();
        assert_eq!(track.group_size_for(100), 1);
    }

    #[test]
    fn test_unsorted_table_still_resolves() {
        let mut breakpoints = roster_breakpoints();
        breakpoints.reverse();
        let track = SlideTrack::new(vec![(); 8], breakpoints).unwrap();
        assert_eq!(track.group_size_for(800), 2);
        assert_eq!(track.group_size_for(2000), 4);
    }

    #[test]
    fn test_empty_items_rejected() {
        let result = SlideTrack::<()>::new(Vec::new(), roster_breakpoints());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_group_size_rejected() {
        let result = SlideTrack::new(
            vec![(); 3],
            vec![Breakpoint { min_width: 768, group_size: 0 }],
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
