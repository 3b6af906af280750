//! Carousel / viewport engine shared by every showcase section.
//!
//! One engine, several call sites: the hero banner, the team roster and
//! the project strip all mount the same state machine with different
//! options (loop mode, autoplay cadence, breakpoint table, direction).
//!
//! - `track` - the immutable item list and its breakpoint table
//! - `direction` - semantic-to-physical motion mapping for RTL layouts
//! - `viewport` - the authoritative index state machine
//! - `autoplay` - cancellable timer driving the viewport
//! - `pagination` - derived dot / edge-navigation state
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_core::carousel::{Carousel, CarouselOptions};
//!
//! let carousel = Carousel::new(items, CarouselOptions::default())?;
//! let shared = carousel.into_shared();
//! lock_shared(&shared).next();
//! ```

pub mod autoplay;
pub mod direction;
pub mod pagination;
pub mod track;
pub mod viewport;

pub use autoplay::{AutoplayOptions, AutoplayScheduler};
pub use direction::{Direction, Motion};
pub use pagination::Pagination;
pub use track::{Breakpoint, SlideTrack};
pub use viewport::{lock_shared, Carousel, CarouselEvent, CarouselOptions, SharedCarousel};
