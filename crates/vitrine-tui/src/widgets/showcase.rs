use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use vitrine_core::content::Project;

use crate::app::{App, Focus};
use crate::theme::EmeraldNight;

use super::{border_style, pagination_line, truncate};

/// Maximum characters of project description shown per card.
const DESCRIPTION_PREVIEW_LEN: usize = 120;

pub struct ShowcaseWidget;

impl ShowcaseWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Showcase;

        let block = Block::default()
            .title(" Selected Work ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused))
            .style(Style::default().bg(EmeraldNight::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let projects = app.showcase.visible_items();
        if projects.is_empty() {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let constraints: Vec<Constraint> = projects
            .iter()
            .map(|_| Constraint::Ratio(1, projects.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[0]);

        for (index, (project, column)) in projects.iter().zip(columns.iter()).enumerate() {
            // The first visible card is the selected one.
            Self::render_card(frame, *column, project, is_focused && index == 0);
        }

        let pagination = app.showcase.pagination();
        let dots = Paragraph::new(pagination_line(&pagination, Some(app.showcase.is_playing())))
            .alignment(Alignment::Center);
        frame.render_widget(dots, rows[1]);
    }

    fn render_card(frame: &mut Frame, area: Rect, project: &Project, highlighted: bool) {
        let card_border = if highlighted {
            Style::default().fg(EmeraldNight::ACCENT)
        } else {
            Style::default().fg(EmeraldNight::BG2)
        };
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(card_border)
            .style(Style::default().bg(EmeraldNight::BG1));
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let max_width = inner.width.saturating_sub(1) as usize;
        let mut lines = vec![Line::from(Span::styled(
            truncate(&project.title, max_width),
            Style::default()
                .fg(EmeraldNight::FG0)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(ref category) = project.category {
            lines.push(Line::from(Span::styled(
                truncate(category, max_width),
                Style::default().fg(EmeraldNight::YELLOW),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            project.description_preview(DESCRIPTION_PREVIEW_LEN),
            Style::default().fg(EmeraldNight::GREY1),
        )));
        if highlighted && project.live_url.is_some() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "o: open live site",
                Style::default().fg(EmeraldNight::GREY0),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
