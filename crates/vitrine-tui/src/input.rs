use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// Semantic "next" on the focused section (the engine's direction
    /// adapter decides the physical motion)
    Next,
    /// Semantic "previous" on the focused section
    Prev,
    /// Jump to a pagination dot (0-based)
    GoToDot(usize),
    ToggleAutoplay,
    /// Open the selected project's live URL in a browser
    OpenProject,
    /// Refetch content from the backend
    Refresh,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Section focus
        (KeyCode::Tab, _) => Action::FocusNext,
        (KeyCode::BackTab, _) => Action::FocusPrev,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::FocusNext,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::FocusPrev,

        // Navigation within the focused section
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::Next,
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::Prev,

        // Pagination dots
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::GoToDot(c as usize - '1' as usize)
        }

        // Actions
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleAutoplay,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenProject,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Refresh,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_maps_to_zero_based_dot() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1'))), Action::GoToDot(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('9'))), Action::GoToDot(8));
        assert_eq!(handle_key_event(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_arrows_are_semantic_navigation() {
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::Prev);
    }
}
