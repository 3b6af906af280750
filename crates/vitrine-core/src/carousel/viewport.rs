//! The viewport controller: the authoritative state machine for
//! "where are we in the track".
//!
//! Navigation settles synchronously, so observers only ever see an
//! idle, on-boundary state; transition duration and easing are a
//! rendering concern and never appear here. Dependents stay in sync
//! through the event channel rather than polling.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

use super::autoplay::AutoplayOptions;
use super::direction::{Direction, Motion};
use super::track::{Breakpoint, SlideTrack};
use crate::{Error, Result};

/// Events emitted by a carousel to keep dependent UI in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A navigation settled on a new index. Emitted exactly once per
    /// completed transition, and only when the index actually changed.
    SelectedIndexChanged { index: usize },
    /// Autoplay was started or stopped.
    AutoplayStateChanged { is_playing: bool },
}

/// Construction contract for one carousel section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselOptions {
    /// Whether navigation wraps past the last/first item.
    #[serde(default = "default_loop")]
    pub loop_enabled: bool,
    /// Layout direction; flips the meaning of next/previous.
    #[serde(default)]
    pub direction: Direction,
    /// Timer-driven advancement, when the section wants it.
    #[serde(default)]
    pub autoplay: Option<AutoplayOptions>,
    /// Viewport-width thresholds for items-per-step.
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            loop_enabled: default_loop(),
            direction: Direction::default(),
            autoplay: None,
            breakpoints: Vec::new(),
        }
    }
}

fn default_loop() -> bool {
    true
}

/// A carousel shared between its owning section and the autoplay timer
/// task.
pub type SharedCarousel<T> = Arc<Mutex<Carousel<T>>>;

/// Lock a shared carousel, recovering the inner state if a previous
/// holder panicked mid-update.
pub fn lock_shared<T>(carousel: &SharedCarousel<T>) -> MutexGuard<'_, Carousel<T>> {
    carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The carousel state machine.
///
/// Owns the selected index, loop mode and active group size. It has no
/// timers and no platform scroll primitives; the autoplay scheduler
/// and the rendering layer drive it through the same public surface.
#[derive(Debug)]
pub struct Carousel<T> {
    track: SlideTrack<T>,
    selected: usize,
    group_size: usize,
    loop_enabled: bool,
    direction: Direction,
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
}

impl<T> Carousel<T> {
    /// Build a carousel over `items`.
    ///
    /// Fails with a configuration error on an empty item list, a zero
    /// breakpoint group size, or a zero autoplay interval. The engine
    /// refuses to initialize rather than run in an undefined state.
    pub fn new(items: Vec<T>, options: CarouselOptions) -> Result<Self> {
        if let Some(ref autoplay) = options.autoplay {
            autoplay.validate()?;
        }
        let track = SlideTrack::new(items, options.breakpoints)?;
        let group_size = track.group_size_for(0);
        Ok(Self {
            track,
            selected: 0,
            group_size,
            loop_enabled: options.loop_enabled,
            direction: options.direction,
            event_tx: None,
        })
    }

    /// Set the event sender used to notify dependents of state changes.
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Wrap in the shared handle the autoplay scheduler expects.
    pub fn into_shared(self) -> SharedCarousel<T> {
        Arc::new(Mutex::new(self))
    }

    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send carousel event: receiver dropped");
            }
        }
    }

    /// Logical index of the first fully-visible item.
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Items advanced per navigation step at the current width.
    #[inline]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.track.len()
    }

    /// Always `false`; an empty track never constructs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.loop_enabled
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        self.track.items()
    }

    pub fn selected_item(&self) -> &T {
        &self.track.items()[self.selected]
    }

    fn can_move(&self, motion: Motion) -> bool {
        if self.loop_enabled {
            return true;
        }
        match motion {
            Motion::Forward => self.selected + 1 < self.track.len(),
            Motion::Backward => self.selected > 0,
        }
    }

    /// Whether a `prev()` call would move the viewport.
    pub fn can_scroll_prev(&self) -> bool {
        self.can_move(self.direction.physical(Motion::Backward))
    }

    /// Whether a `next()` call would move the viewport.
    pub fn can_scroll_next(&self) -> bool {
        self.can_move(self.direction.physical(Motion::Forward))
    }

    /// Advance one step in the user's "next" direction.
    pub fn next(&mut self) {
        self.advance(self.direction.physical(Motion::Forward));
    }

    /// Advance one step in the user's "previous" direction.
    pub fn prev(&mut self) {
        self.advance(self.direction.physical(Motion::Backward));
    }

    fn advance(&mut self, motion: Motion) {
        let len = self.track.len();
        let step = self.group_size;
        let target = match (motion, self.loop_enabled) {
            (Motion::Forward, true) => (self.selected + step) % len,
            (Motion::Forward, false) => (self.selected + step).min(len - 1),
            (Motion::Backward, true) => (self.selected + len - (step % len)) % len,
            (Motion::Backward, false) => self.selected.saturating_sub(step),
        };
        self.set_selected(target);
    }

    /// Jump directly to `index`, bypassing intermediate indices (used
    /// by pagination-dot clicks).
    ///
    /// Out-of-range indices are an error, never silently clamped; a
    /// bad index here means a bug in the caller's dot arithmetic.
    pub fn scroll_to(&mut self, index: usize) -> Result<()> {
        let len = self.track.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.set_selected(index);
        Ok(())
    }

    /// Jump to the first index of a pagination dot.
    pub fn scroll_to_dot(&mut self, dot: usize) -> Result<()> {
        let index = dot.checked_mul(self.group_size).unwrap_or(usize::MAX);
        self.scroll_to(index)
    }

    fn set_selected(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        self.selected = index;
        self.send_event(CarouselEvent::SelectedIndexChanged { index });
    }

    /// Recompute the group size for a new viewport width.
    ///
    /// When the grouping changes, the selected index rounds down to
    /// the nearest group boundary so it remains a valid step target
    /// under the new grouping.
    pub fn on_resize(&mut self, width: u16) {
        let group_size = self.track.group_size_for(width);
        if group_size == self.group_size {
            return;
        }
        self.group_size = group_size;
        let aligned = (self.selected / group_size) * group_size;
        self.set_selected(aligned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(loop_enabled: bool, direction: Direction) -> CarouselOptions {
        CarouselOptions {
            loop_enabled,
            direction,
            autoplay: None,
            breakpoints: Vec::new(),
        }
    }

    fn carousel(len: usize, loop_enabled: bool, direction: Direction) -> Carousel<usize> {
        Carousel::new((0..len).collect(), options(loop_enabled, direction)).unwrap()
    }

    #[test]
    fn test_loop_next_visits_all_and_wraps() {
        let mut c = carousel(4, true, Direction::Ltr);
        let mut visited = Vec::new();
        for _ in 0..4 {
            c.next();
            visited.push(c.selected_index());
        }
        assert_eq!(visited, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_clamped_next_stops_at_last_index() {
        let mut c = carousel(4, false, Direction::Ltr);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.selected_index(), 3);
        c.next();
        assert_eq!(c.selected_index(), 3);
        assert!(!c.can_scroll_next());
        assert!(c.can_scroll_prev());
    }

    #[test]
    fn test_prev_is_noop_at_start_without_loop() {
        let mut c = carousel(4, false, Direction::Ltr);
        c.prev();
        assert_eq!(c.selected_index(), 0);
        assert!(!c.can_scroll_prev());
    }

    #[test]
    fn test_next_then_prev_round_trips_with_loop() {
        let mut c = carousel(5, true, Direction::Ltr);
        c.scroll_to(2).unwrap();
        c.next();
        c.prev();
        assert_eq!(c.selected_index(), 2);
        // Round-trips across the wrap boundary too.
        c.scroll_to(0).unwrap();
        c.prev();
        assert_eq!(c.selected_index(), 4);
        c.next();
        assert_eq!(c.selected_index(), 0);
    }

    #[test]
    fn test_scroll_to_out_of_range_fails_and_preserves_state() {
        let mut c = carousel(4, true, Direction::Ltr);
        c.scroll_to(2).unwrap();
        let result = c.scroll_to(4);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(c.selected_index(), 2);
    }

    #[test]
    fn test_scroll_to_emits_only_on_change() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut c = Carousel::new(
            (0..4).collect::<Vec<_>>(),
            options(true, Direction::Ltr),
        )
        .unwrap()
        .with_event_sender(tx);

        c.scroll_to(2).unwrap();
        c.scroll_to(2).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            CarouselEvent::SelectedIndexChanged { index: 2 }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rtl_next_matches_ltr_prev() {
        let mut rtl = carousel(5, true, Direction::Rtl);
        let mut ltr = carousel(5, true, Direction::Ltr);
        let rtl_sequence: Vec<usize> = (0..7)
            .map(|_| {
                rtl.next();
                rtl.selected_index()
            })
            .collect();
        let ltr_sequence: Vec<usize> = (0..7)
            .map(|_| {
                ltr.prev();
                ltr.selected_index()
            })
            .collect();
        assert_eq!(rtl_sequence, ltr_sequence);
    }

    #[test]
    fn test_rtl_edge_state_follows_semantics() {
        // Without loop, a fresh RTL track cannot go "next" (physically
        // backward from index 0) but can go "prev".
        let c = carousel(4, false, Direction::Rtl);
        assert!(!c.can_scroll_next());
        assert!(c.can_scroll_prev());
    }

    #[test]
    fn test_group_step_navigation() {
        let mut c = Carousel::new(
            (0..10).collect::<Vec<_>>(),
            CarouselOptions {
                loop_enabled: false,
                direction: Direction::Ltr,
                autoplay: None,
                breakpoints: vec![Breakpoint { min_width: 0, group_size: 3 }],
            },
        )
        .unwrap();
        c.next();
        assert_eq!(c.selected_index(), 3);
        c.next();
        assert_eq!(c.selected_index(), 6);
        c.next();
        assert_eq!(c.selected_index(), 9);
        c.next();
        assert_eq!(c.selected_index(), 9);
    }

    #[test]
    fn test_resize_regroups_and_aligns_selection() {
        let mut c = Carousel::new(
            (0..10).collect::<Vec<_>>(),
            CarouselOptions {
                loop_enabled: true,
                direction: Direction::Ltr,
                autoplay: None,
                breakpoints: vec![
                    Breakpoint { min_width: 0, group_size: 1 },
                    Breakpoint { min_width: 768, group_size: 2 },
                    Breakpoint { min_width: 1024, group_size: 3 },
                ],
            },
        )
        .unwrap();
        c.scroll_to(7).unwrap();

        c.on_resize(1100);
        assert_eq!(c.group_size(), 3);
        // 7 rounds down to the nearest group boundary under the new
        // grouping.
        assert_eq!(c.selected_index(), 6);

        c.on_resize(800);
        assert_eq!(c.group_size(), 2);
        assert_eq!(c.selected_index(), 6);
    }

    #[test]
    fn test_scroll_to_dot_targets_group_start() {
        let mut c = Carousel::new(
            (0..10).collect::<Vec<_>>(),
            CarouselOptions {
                loop_enabled: true,
                direction: Direction::Ltr,
                autoplay: None,
                breakpoints: vec![Breakpoint { min_width: 0, group_size: 4 }],
            },
        )
        .unwrap();
        c.scroll_to_dot(2).unwrap();
        assert_eq!(c.selected_index(), 8);
        assert!(c.scroll_to_dot(3).is_err());
    }

    #[test]
    fn test_zero_autoplay_interval_rejected() {
        let result = Carousel::new(
            vec![0usize; 3],
            CarouselOptions {
                loop_enabled: true,
                direction: Direction::Ltr,
                autoplay: Some(AutoplayOptions {
                    interval_ms: 0,
                    start_playing: true,
                }),
                breakpoints: Vec::new(),
            },
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
