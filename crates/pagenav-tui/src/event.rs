//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Key action that can be performed in normal mode.
///
/// Keys typed while the jump input has focus go to the input instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    PrevPage,
    NextPage,
    /// Re-assert the current page through the total indicator.
    Total,
    /// Move focus into the jump input.
    FocusJump,
    /// Focus the jump input and start typing a digit.
    JumpDigit(char),

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    // Other actions
    Refresh,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Page navigation - vim style
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::PrevPage,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::NextPage,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::PrevPage,
            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::NextPage,

            // Page navigation - arrows and paging keys
            (KeyCode::Left, _) | (KeyCode::PageUp, _) => KeyAction::PrevPage,
            (KeyCode::Right, _) | (KeyCode::PageDown, _) => KeyAction::NextPage,

            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::Total,

            // Jump input
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::FocusJump,
            (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::FocusJump,
            (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() => {
                KeyAction::JumpDigit(c)
            }

            // UI toggles
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::ToggleHelp,
            (KeyCode::Char('T'), KeyModifiers::SHIFT) => KeyAction::ToggleTheme,

            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,

            _ => KeyAction::None,
        }
    }
}

/// Whether a mouse event is a left-button press, returning its cell.
pub fn left_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Pages",
            bindings: vec![
                KeyBinding { keys: "h/p ←", description: "Previous page" },
                KeyBinding { keys: "l/n →", description: "Next page" },
                KeyBinding { keys: "t", description: "Reload current page (total)" },
                KeyBinding { keys: "Click", description: "Activate a control" },
            ],
        },
        HelpSection {
            title: "Jump",
            bindings: vec![
                KeyBinding { keys: "g / 0-9", description: "Focus page input" },
                KeyBinding { keys: "Enter", description: "Go to typed page" },
                KeyBinding { keys: "Esc", description: "Leave page input" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "r", description: "Refresh and reload" },
                KeyBinding { keys: "T", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}
