use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::warn;

use vitrine_core::content::{
    sample_projects, sample_team, ContentClient, ContentProvider, Project, TeamMember,
};
use vitrine_core::AppConfig;
use vitrine_tui::{
    app::App,
    event::{AppEvent, ContentResult, EventHandler},
    input::{handle_key_event, Action},
    widgets::{HeroWidget, ShowcaseWidget, StatusBarWidget, TeamWidget},
};

pub async fn run(config: Arc<AppConfig>, offline: bool) -> Result<()> {
    // Resolve content before the sections mount
    let (team, projects, offline) = load_content(&config, offline).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Vitrine"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config.clone(), team, projects, size.width)?;
    if offline {
        app.offline = true;
        app.set_status("Backend unreachable: showing bundled sample content");
    }

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Channel for async content refresh results
    let (content_tx, mut content_rx) = mpsc::unbounded_channel::<ContentResult>();

    let result = event_loop(
        &mut terminal,
        &mut app,
        &event_handler,
        &config,
        &content_tx,
        &mut content_rx,
    )
    .await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Fetch the section content, degrading to bundled samples when the
/// backend is unreachable. Returns the effective offline state.
async fn load_content(
    config: &AppConfig,
    offline: bool,
) -> Result<(Vec<TeamMember>, Vec<Project>, bool)> {
    if offline {
        return Ok((sample_team(), sample_projects(), true));
    }

    let client = ContentClient::new(&config.api)?;
    match tokio::try_join!(client.team(), client.projects()) {
        Ok((team, projects)) => Ok((team, projects, false)),
        Err(e) => {
            warn!("Falling back to sample content: {}", e);
            Ok((sample_team(), sample_projects(), true))
        }
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    config: &Arc<AppConfig>,
    content_tx: &mpsc::UnboundedSender<ContentResult>,
    content_rx: &mut mpsc::UnboundedReceiver<ContentResult>,
) -> Result<()> {
    loop {
        // Apply completed content fetches (non-blocking)
        while let Ok(result) = content_rx.try_recv() {
            app.apply_content(result)?;
        }

        // Fold engine events into the status line
        app.drain_carousel_events();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // Three stacked sections: hero, team, project strip
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Ratio(4, 10),
                    Constraint::Ratio(3, 10),
                    Constraint::Ratio(3, 10),
                ])
                .split(main_layout[0]);

            HeroWidget::render(frame, sections[0], app);
            TeamWidget::render(frame, sections[1], app);
            ShowcaseWidget::render(frame, sections[2], app);
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    handle_action(app, action, config, content_tx);
                }
                AppEvent::Resize(width, _) => {
                    app.on_resize(width);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    config: &Arc<AppConfig>,
    content_tx: &mpsc::UnboundedSender<ContentResult>,
) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::Next => app.nav_next(),
        Action::Prev => app.nav_prev(),
        Action::GoToDot(dot) => app.go_to_dot(dot),
        Action::ToggleAutoplay => app.toggle_autoplay(),
        Action::OpenProject => app.open_selected_project(),
        Action::Refresh => spawn_refresh(app, config, content_tx),
        Action::None => {}
    }
}

/// Kick off background fetches for both remote-backed sections.
fn spawn_refresh(
    app: &mut App,
    config: &Arc<AppConfig>,
    content_tx: &mpsc::UnboundedSender<ContentResult>,
) {
    if app.is_fetching() {
        app.set_status("Refresh already in progress...");
        return;
    }

    let client = match ContentClient::new(&config.api) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            app.set_status(format!("Refresh failed: {}", e));
            return;
        }
    };

    app.pending_fetches = 2;
    app.set_status("Fetching content...");

    let tx = content_tx.clone();
    let team_client = Arc::clone(&client);
    tokio::spawn(async move {
        let result = match team_client.team().await {
            Ok(members) => ContentResult::Team { members },
            Err(e) => ContentResult::Failure {
                section: "team",
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });

    let tx = content_tx.clone();
    tokio::spawn(async move {
        let result = match client.projects().await {
            Ok(projects) => ContentResult::Projects { projects },
            Err(e) => ContentResult::Failure {
                section: "projects",
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}
