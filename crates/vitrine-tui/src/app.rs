use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use vitrine_core::carousel::{
    lock_shared, AutoplayScheduler, Carousel, CarouselEvent, CarouselOptions, Pagination,
    SharedCarousel,
};
use vitrine_core::content::{HeroSlide, Project, TeamMember};
use vitrine_core::AppConfig;

use crate::event::ContentResult;

/// Which showcase section currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Hero,
    Team,
    Showcase,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Hero => Focus::Team,
            Focus::Team => Focus::Showcase,
            Focus::Showcase => Focus::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Hero => Focus::Showcase,
            Focus::Team => Focus::Hero,
            Focus::Showcase => Focus::Team,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Focus::Hero => "Hero",
            Focus::Team => "Team",
            Focus::Showcase => "Projects",
        }
    }
}

/// One mounted carousel section: the shared engine instance plus its
/// optional autoplay timer.
pub struct Section<T> {
    carousel: SharedCarousel<T>,
    autoplay: Option<AutoplayScheduler<T>>,
    options: CarouselOptions,
}

impl<T: Send + 'static> Section<T> {
    /// Mount a section: build the engine, wire the event channel, and
    /// arm autoplay when configured to start playing.
    pub fn mount(
        items: Vec<T>,
        options: CarouselOptions,
        events: &mpsc::UnboundedSender<CarouselEvent>,
        width: u16,
    ) -> anyhow::Result<Self> {
        let mut carousel =
            Carousel::new(items, options.clone())?.with_event_sender(events.clone());
        carousel.on_resize(width);
        let carousel = carousel.into_shared();

        let mut autoplay = match options.autoplay {
            Some(ref autoplay_options) => Some(
                AutoplayScheduler::new(Arc::clone(&carousel), autoplay_options)?
                    .with_event_sender(events.clone()),
            ),
            None => None,
        };
        if let (Some(scheduler), Some(autoplay_options)) =
            (autoplay.as_mut(), options.autoplay.as_ref())
        {
            if autoplay_options.start_playing {
                scheduler.start();
            }
        }

        Ok(Self {
            carousel,
            autoplay,
            options,
        })
    }

    /// Replace the item list by mounting a fresh engine instance.
    ///
    /// Tracks are immutable once mounted; the old engine (and its
    /// timer) is torn down, never mutated in place.
    pub fn remount(
        &mut self,
        items: Vec<T>,
        events: &mpsc::UnboundedSender<CarouselEvent>,
        width: u16,
    ) -> anyhow::Result<()> {
        *self = Self::mount(items, self.options.clone(), events, width)?;
        Ok(())
    }

    pub fn toggle_autoplay(&mut self) {
        if let Some(scheduler) = self.autoplay.as_mut() {
            scheduler.toggle();
        }
    }
}

impl<T> Section<T> {
    /// Run `f` against the locked engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Carousel<T>) -> R) -> R {
        f(&mut lock_shared(&self.carousel))
    }

    pub fn next(&self) {
        self.with(|c| c.next());
    }

    pub fn prev(&self) {
        self.with(|c| c.prev());
    }

    pub fn scroll_to_dot(&self, dot: usize) -> vitrine_core::Result<()> {
        self.with(|c| c.scroll_to_dot(dot))
    }

    pub fn on_resize(&self, width: u16) {
        self.with(|c| c.on_resize(width));
    }

    pub fn pagination(&self) -> Pagination {
        self.with(|c| Pagination::derive(c))
    }

    pub fn selected_index(&self) -> usize {
        self.with(|c| c.selected_index())
    }

    pub fn len(&self) -> usize {
        self.with(|c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|c| c.is_empty())
    }

    pub fn has_autoplay(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.as_ref().is_some_and(|s| s.is_playing())
    }

    /// The items currently visible: one group starting at the selected
    /// index, wrapping only when the section loops.
    pub fn visible_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.with(|c| {
            let len = c.len();
            let start = c.selected_index();
            let count = c.group_size().min(len);
            if c.is_looping() {
                (0..count).map(|i| c.items()[(start + i) % len].clone()).collect()
            } else {
                let end = (start + count).min(len);
                c.items()[start..end].to_vec()
            }
        })
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Hero banner section
    pub hero: Section<HeroSlide>,
    /// Team roster section
    pub team: Section<TeamMember>,
    /// Project showcase section
    pub showcase: Section<Project>,
    /// Currently focused section
    pub focus: Focus,
    /// Sender cloned into every mounted engine
    events_tx: mpsc::UnboundedSender<CarouselEvent>,
    /// Receiver for engine events
    events_rx: mpsc::UnboundedReceiver<CarouselEvent>,
    /// Current terminal width in columns
    pub width: u16,
    /// Status bar message
    pub status_message: Option<String>,
    /// Number of content fetches still in flight
    pub pending_fetches: u8,
    /// True when rendering bundled sample content
    pub offline: bool,
    /// Whether the app should exit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        team: Vec<TeamMember>,
        projects: Vec<Project>,
        width: u16,
    ) -> anyhow::Result<Self> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let hero = Section::mount(
            HeroSlide::deck(),
            config.sections.hero.clone(),
            &events_tx,
            width,
        )?;
        let team = Section::mount(team, config.sections.team.clone(), &events_tx, width)?;
        let showcase = Section::mount(
            projects,
            config.sections.showcase.clone(),
            &events_tx,
            width,
        )?;

        Ok(Self {
            config,
            hero,
            team,
            showcase,
            focus: Focus::Hero,
            events_tx,
            events_rx,
            width,
            status_message: None,
            pending_fetches: 0,
            offline: false,
            should_quit: false,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Route a semantic "next" to the focused section.
    pub fn nav_next(&mut self) {
        match self.focus {
            Focus::Hero => self.hero.next(),
            Focus::Team => self.team.next(),
            Focus::Showcase => self.showcase.next(),
        }
    }

    /// Route a semantic "previous" to the focused section.
    pub fn nav_prev(&mut self) {
        match self.focus {
            Focus::Hero => self.hero.prev(),
            Focus::Team => self.team.prev(),
            Focus::Showcase => self.showcase.prev(),
        }
    }

    /// Jump the focused section to a pagination dot. Out-of-range dots
    /// surface the engine's error in the status bar rather than being
    /// clamped away.
    pub fn go_to_dot(&mut self, dot: usize) {
        let result = match self.focus {
            Focus::Hero => self.hero.scroll_to_dot(dot),
            Focus::Team => self.team.scroll_to_dot(dot),
            Focus::Showcase => self.showcase.scroll_to_dot(dot),
        };
        if let Err(e) = result {
            self.set_status(e.to_string());
        }
    }

    pub fn toggle_autoplay(&mut self) {
        let toggled = match self.focus {
            Focus::Hero => match self.hero.autoplay.as_mut() {
                Some(scheduler) => {
                    scheduler.toggle();
                    true
                }
                None => false,
            },
            Focus::Team => match self.team.autoplay.as_mut() {
                Some(scheduler) => {
                    scheduler.toggle();
                    true
                }
                None => false,
            },
            Focus::Showcase => match self.showcase.autoplay.as_mut() {
                Some(scheduler) => {
                    scheduler.toggle();
                    true
                }
                None => false,
            },
        };
        if !toggled {
            self.set_status(format!("{} has no autoplay", self.focus.title()));
        }
    }

    /// Open the selected project's live URL in the default browser.
    pub fn open_selected_project(&mut self) {
        if self.focus != Focus::Showcase {
            return;
        }
        let live_url = self
            .showcase
            .with(|c| c.selected_item().live_url.clone());
        match live_url {
            Some(url) => {
                if let Err(e) = open::that(&url) {
                    self.set_status(format!("Failed to open browser: {}", e));
                } else {
                    self.set_status(format!("Opening: {}", url));
                }
            }
            None => self.set_status("Selected project has no live URL"),
        }
    }

    /// Propagate a terminal resize to every section's grouping
    /// resolver.
    pub fn on_resize(&mut self, width: u16) {
        self.width = width;
        self.hero.on_resize(width);
        self.team.on_resize(width);
        self.showcase.on_resize(width);
    }

    /// Drain engine events delivered since the last frame.
    pub fn drain_carousel_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            debug!("Carousel event: {:?}", event);
            if let CarouselEvent::AutoplayStateChanged { is_playing } = event {
                self.set_status(if is_playing {
                    "Autoplay resumed"
                } else {
                    "Autoplay paused"
                });
            }
        }
    }

    /// Apply a completed content fetch, re-mounting the affected
    /// section with the fresh item list.
    pub fn apply_content(&mut self, result: ContentResult) -> anyhow::Result<()> {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
        match result {
            ContentResult::Team { members } => {
                let count = members.len();
                self.team.remount(members, &self.events_tx, self.width)?;
                self.offline = false;
                self.set_status(format!("Team updated: {} members", count));
            }
            ContentResult::Projects { projects } => {
                let count = projects.len();
                self.showcase.remount(projects, &self.events_tx, self.width)?;
                self.offline = false;
                self.set_status(format!("Projects updated: {} entries", count));
            }
            ContentResult::Failure { section, error } => {
                self.set_status(format!("{} fetch failed: {}", section, error));
            }
        }
        Ok(())
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetches > 0
    }
}
