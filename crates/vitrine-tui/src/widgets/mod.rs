mod hero;
mod showcase;
mod status_bar;
mod team;

pub use hero::HeroWidget;
pub use showcase::ShowcaseWidget;
pub use status_bar::StatusBarWidget;
pub use team::TeamWidget;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use vitrine_core::carousel::Pagination;

use crate::theme::EmeraldNight;

/// Shared dot row: edge arrows (dimmed when disabled), one dot per
/// navigation step, and the play/pause indicator for autoplaying
/// sections. Every section renders its pagination through this one
/// derivation.
pub(crate) fn pagination_line(
    pagination: &Pagination,
    is_playing: Option<bool>,
) -> Line<'static> {
    let edge_style = |enabled: bool| {
        if enabled {
            Style::default().fg(EmeraldNight::FG1)
        } else {
            Style::default().fg(EmeraldNight::GREY0)
        }
    };

    let mut spans = vec![
        Span::styled("\u{2039} ", edge_style(pagination.can_scroll_prev)),
    ];
    for dot in 0..pagination.dot_count {
        let span = if dot == pagination.active_dot {
            Span::styled("\u{25cf} ", Style::default().fg(EmeraldNight::ACCENT))
        } else {
            Span::styled("\u{25cb} ", Style::default().fg(EmeraldNight::GREY0))
        };
        spans.push(span);
    }
    spans.push(Span::styled(
        "\u{203a}",
        edge_style(pagination.can_scroll_next),
    ));

    if let Some(playing) = is_playing {
        spans.push(Span::raw("  "));
        let indicator = if playing {
            Span::styled("\u{25b6}", Style::default().fg(EmeraldNight::ACCENT))
        } else {
            Span::styled("\u{23f8}", Style::default().fg(EmeraldNight::YELLOW))
        };
        spans.push(indicator);
    }

    Line::from(spans)
}

/// Border style for a section block depending on focus.
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(EmeraldNight::ACCENT)
    } else {
        Style::default().fg(EmeraldNight::GREY0)
    }
}

/// Truncate `text` to at most `max_width` display columns, appending
/// an ellipsis when something was cut.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}
