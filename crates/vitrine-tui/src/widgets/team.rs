use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use vitrine_core::content::TeamMember;

use crate::app::{App, Focus};
use crate::theme::EmeraldNight;

use super::{border_style, pagination_line, truncate};

pub struct TeamWidget;

impl TeamWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Team;

        let block = Block::default()
            .title(" Our Team ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused))
            .style(Style::default().bg(EmeraldNight::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let members = app.team.visible_items();
        if members.is_empty() {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let constraints: Vec<Constraint> = members
            .iter()
            .map(|_| Constraint::Ratio(1, members.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[0]);

        for (member, column) in members.iter().zip(columns.iter()) {
            Self::render_card(frame, *column, member);
        }

        let pagination = app.team.pagination();
        let dots = Paragraph::new(pagination_line(&pagination, None))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(dots, rows[1]);
    }

    fn render_card(frame: &mut Frame, area: Rect, member: &TeamMember) {
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(EmeraldNight::BG2))
            .style(Style::default().bg(EmeraldNight::BG1));
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let max_width = inner.width.saturating_sub(1) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                truncate(&member.name, max_width),
                Style::default()
                    .fg(EmeraldNight::FG0)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&member.role, max_width),
                Style::default().fg(EmeraldNight::ACCENT),
            )),
        ];
        if let Some(ref bio) = member.bio {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                bio.clone(),
                Style::default().fg(EmeraldNight::GREY1),
            )));
        }
        if let Some(ref github) = member.social.github {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                truncate(github, max_width),
                Style::default().fg(EmeraldNight::BLUE),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
