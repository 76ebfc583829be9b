//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.
//! Some keys are shared by actions that never apply on the same screen
//! (`s` toggles the list spinner and starts/stops the timer); screens resolve
//! keys against their own action set, see [`super::Keymap::resolve`].

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
    /// Emacs-style navigation (Ctrl+N/P, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_navigation(),
            KeymapPreset::Vim => vim_navigation(),
            KeymapPreset::Emacs => emacs_navigation(),
        };
        bindings.extend(common_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard navigation (arrows)
fn standard_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("right", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

/// Vim-style navigation (hjkl) plus arrows
fn vim_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::PageUp),
        KeyBinding::new("left", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("l", Action::PageDown),
        KeyBinding::new("right", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop), // gg in real vim, but single g works
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("G", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

/// Emacs-style navigation (Ctrl+N/P) plus arrows
fn emacs_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
    ]
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        // Selection
        KeyBinding::new("a", Action::Launch),
        // Filtering
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("backspace", Action::Backspace),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("?", Action::Help),
        // Timer
        KeyBinding::new("r", Action::Reset),
        KeyBinding::new("s", Action::ToggleTimer),
        // List display
        KeyBinding::new("s", Action::ToggleSpinner),
        KeyBinding::new("T", Action::ToggleTitleBar),
        KeyBinding::new("S", Action::ToggleStatusBar),
        KeyBinding::new("P", Action::TogglePagination),
        KeyBinding::new("H", Action::ToggleHelp),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_every_preset_binds_core_actions() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::Confirm,
                Action::Cancel,
                Action::Launch,
                Action::Search,
                Action::Quit,
                Action::Reset,
                Action::ToggleTimer,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset is missing {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_every_preset_binding_parses() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "unparseable key {:?}", binding.key);
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "k" && b.action == Action::MoveUp));
        assert!(bindings
            .iter()
            .any(|b| b.key == "h" && b.action == Action::PageUp));
        assert!(bindings
            .iter()
            .any(|b| b.key == "l" && b.action == Action::PageDown));
    }

    #[test]
    fn test_emacs_has_ctrl_np() {
        let bindings = KeymapPreset::Emacs.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+n" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+p" && b.action == Action::MoveUp));
    }

    #[test]
    fn test_preset_serialization() {
        let preset = KeymapPreset::Vim;
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(json, "\"vim\"");
    }

    #[test]
    fn test_preset_deserialization() {
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}
