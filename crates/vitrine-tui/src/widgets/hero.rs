use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::theme::EmeraldNight;

use super::{border_style, pagination_line};

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Hero;

        let block = Block::default()
            .title(" Vitrine Studio ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused))
            .style(Style::default().bg(EmeraldNight::BG0));

        let slide = app.hero.with(|c| c.selected_item().clone());
        let pagination = app.hero.pagination();

        // Rough vertical centering inside the banner area
        let inner_height = area.height.saturating_sub(2) as usize;
        let content_lines = 7;
        let top_padding = inner_height.saturating_sub(content_lines) / 2;

        let mut lines: Vec<Line> = Vec::with_capacity(top_padding + content_lines);
        for _ in 0..top_padding {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            slide.title,
            Style::default()
                .fg(EmeraldNight::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            slide.subtitle,
            Style::default().fg(EmeraldNight::FG1),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            slide.description,
            Style::default().fg(EmeraldNight::GREY1),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", slide.cta),
            Style::default()
                .fg(EmeraldNight::BG0)
                .bg(EmeraldNight::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        lines.push(pagination_line(&pagination, Some(app.hero.is_playing())));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
