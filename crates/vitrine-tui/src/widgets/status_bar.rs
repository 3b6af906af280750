use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::EmeraldNight;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let focused = app.focus.title();
        let position = match app.focus {
            crate::app::Focus::Hero => (app.hero.selected_index(), app.hero.len()),
            crate::app::Focus::Team => (app.team.selected_index(), app.team.len()),
            crate::app::Focus::Showcase => {
                (app.showcase.selected_index(), app.showcase.len())
            }
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", focused),
                Style::default()
                    .fg(EmeraldNight::BG0)
                    .bg(EmeraldNight::ACCENT),
            ),
            Span::styled(
                format!(" {}/{} ", position.0 + 1, position.1),
                Style::default().fg(EmeraldNight::FG1),
            ),
        ];

        if app.offline {
            spans.push(Span::styled(
                " offline ",
                Style::default().fg(EmeraldNight::WARNING),
            ));
        }
        if app.is_fetching() {
            spans.push(Span::styled(
                " fetching... ",
                Style::default().fg(EmeraldNight::YELLOW),
            ));
        }

        let message = match &app.status_message {
            Some(msg) => msg.clone(),
            None => {
                "Tab: section | \u{2190}/\u{2192}: navigate | 1-9: dots | Space: play/pause \
                 | r: refresh | o: open | q: quit"
                    .to_string()
            }
        };
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(EmeraldNight::GREY1),
        ));

        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(EmeraldNight::BG1));
        frame.render_widget(paragraph, area);
    }
}
