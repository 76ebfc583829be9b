//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Jump to the previous page
    PageUp,
    /// Jump to the next page
    PageDown,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,

    // ============ Selection & Confirmation ============
    /// Confirm selection / accept filter (Enter)
    Confirm,
    /// Cancel filter / return to the menu (Esc)
    Cancel,
    /// Launch the screen behind the selected item
    Launch,

    // ============ Filtering ============
    /// Start typing a filter
    Search,
    /// Delete the last filter character
    Backspace,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Toggle the full help listing
    Help,

    // ============ Timer ============
    /// Restore the configured countdown
    Reset,
    /// Start or stop the countdown
    ToggleTimer,

    // ============ List display ============
    /// Show or hide the activity spinner
    ToggleSpinner,
    /// Show or hide the title bar (and filtering with it)
    ToggleTitleBar,
    /// Show or hide the status bar
    ToggleStatusBar,
    /// Show or hide the pagination dots
    TogglePagination,
    /// Show or hide the help footer
    ToggleHelp,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "up",
            Action::MoveDown => "down",
            Action::PageUp => "prev page",
            Action::PageDown => "next page",
            Action::GoToTop => "go to start",
            Action::GoToEnd => "go to end",
            Action::Confirm => "choose",
            Action::Cancel => "back",
            Action::Launch => "launch item",
            Action::Search => "filter",
            Action::Backspace => "delete char",
            Action::Quit => "quit",
            Action::Help => "more",
            Action::Reset => "reset",
            Action::ToggleTimer => "start/stop",
            Action::ToggleSpinner => "toggle spinner",
            Action::ToggleTitleBar => "toggle title",
            Action::ToggleStatusBar => "toggle status",
            Action::TogglePagination => "toggle pagination",
            Action::ToggleHelp => "toggle help",
        }
    }
}
