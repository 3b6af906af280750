//! Autoplay scheduler: a cancellable repeating timer that calls the
//! viewport's `next()` on a fixed cadence while playing.
//!
//! `Stopped -> Armed -> Stopped`. Arming spawns a tokio interval task;
//! stopping cancels it before returning, and dropping the scheduler
//! cancels it unconditionally so no tick can reach a torn-down
//! section. Manual navigation composes freely with the timer - the
//! scheduler drives the same public surface the user interacts with
//! and never pauses on interaction.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::viewport::{lock_shared, CarouselEvent, SharedCarousel};
use crate::{Error, Result};

/// Autoplay settings for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayOptions {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// Whether the section starts playing when mounted.
    #[serde(default = "default_start_playing")]
    pub start_playing: bool,
}

fn default_start_playing() -> bool {
    true
}

impl AutoplayOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::Config(
                "autoplay interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Timer loop driving a shared carousel while playing.
pub struct AutoplayScheduler<T> {
    carousel: SharedCarousel<T>,
    interval: Duration,
    is_playing: bool,
    shutdown_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
}

impl<T: Send + 'static> AutoplayScheduler<T> {
    /// Create a stopped scheduler for `carousel`.
    pub fn new(carousel: SharedCarousel<T>, options: &AutoplayOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            carousel,
            interval: options.interval(),
            is_playing: false,
            shutdown_tx: None,
            task: None,
            event_tx: None,
        })
    }

    /// Set the event sender used to notify dependents of play state.
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send autoplay event: receiver dropped");
            }
        }
    }

    /// Arm the timer. No-op when already armed.
    ///
    /// The first advance happens a full interval after this call, and
    /// every firing reschedules from zero - re-arming never resumes a
    /// partially-elapsed countdown.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let carousel = Arc::clone(&self.carousel);
        let interval = self.interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // Skip the first tick (fires immediately)
            ticker.tick().await;
            loop {
                tokio::select! {
                    result = shutdown_rx.changed() => {
                        if result.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        lock_shared(&carousel).next();
                    }
                }
            }
            debug!("Autoplay timer stopped");
        });

        self.shutdown_tx = Some(shutdown_tx);
        self.task = Some(task);
        self.is_playing = true;
        self.send_event(CarouselEvent::AutoplayStateChanged { is_playing: true });
    }

    /// Disarm the timer. Idempotent; once this returns, no further
    /// tick can reach the carousel.
    pub fn stop(&mut self) {
        if self.task.is_none() {
            self.is_playing = false;
            return;
        }
        self.cancel();
        self.is_playing = false;
        self.send_event(CarouselEvent::AutoplayStateChanged { is_playing: false });
    }

    /// Flip the playing state.
    pub fn toggle(&mut self) {
        if self.is_playing {
            self.stop();
        } else {
            self.start();
        }
    }
}

impl<T> AutoplayScheduler<T> {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn cancel(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> Drop for AutoplayScheduler<T> {
    fn drop(&mut self) {
        // Cancellation holds on every exit path, not only stop().
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, CarouselOptions, Direction};

    fn shared(len: usize, direction: Direction) -> SharedCarousel<usize> {
        Carousel::new(
            (0..len).collect(),
            CarouselOptions {
                loop_enabled: true,
                direction,
                autoplay: None,
                breakpoints: Vec::new(),
            },
        )
        .unwrap()
        .into_shared()
    }

    fn selected(carousel: &SharedCarousel<usize>) -> usize {
        lock_shared(carousel).selected_index()
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_once_per_interval() {
        let carousel = shared(4, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 7000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(21_100)).await;
        assert_eq!(selected(&carousel), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_advancement() {
        let carousel = shared(8, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(selected(&carousel), 2);

        scheduler.stop();
        tokio::time::sleep(Duration::from_millis(60_000)).await;
        assert_eq!(selected(&carousel), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_noop_when_armed() {
        let carousel = shared(8, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();
        tokio::time::sleep(Duration::from_millis(500)).await;
        // A second start must not spawn a second timer or reset the
        // running countdown.
        scheduler.start();
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(selected(&carousel), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_uses_fresh_countdown() {
        let carousel = shared(8, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();
        tokio::time::sleep(Duration::from_millis(900)).await;
        scheduler.stop();
        scheduler.start();
        // The partially-elapsed countdown does not carry over.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(selected(&carousel), 0);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(selected(&carousel), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let carousel = shared(8, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();
        drop(scheduler);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(selected(&carousel), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_respects_direction() {
        let carousel = shared(4, Direction::Rtl);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        // Semantic "next" on an RTL track moves physically backward.
        assert_eq!(selected(&carousel), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_emits_state_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let carousel = shared(4, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options)
            .unwrap()
            .with_event_sender(tx);

        scheduler.toggle();
        assert!(scheduler.is_playing());
        scheduler.toggle();
        assert!(!scheduler.is_playing());

        assert_eq!(
            rx.try_recv().unwrap(),
            CarouselEvent::AutoplayStateChanged { is_playing: true }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CarouselEvent::AutoplayStateChanged { is_playing: false }
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let options = AutoplayOptions { interval_ms: 0, start_playing: true };
        assert!(options.validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_composes_with_timer() {
        let carousel = shared(8, Direction::Ltr);
        let options = AutoplayOptions { interval_ms: 1000, start_playing: true };
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&carousel), &options).unwrap();
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        lock_shared(&carousel).next();
        assert_eq!(selected(&carousel), 2);
        assert!(scheduler.is_playing());

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(selected(&carousel), 3);
    }
}
