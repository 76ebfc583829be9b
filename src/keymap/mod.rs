//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and the human-readable help text screens show in their footers.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Resolve a key against the actions a screen understands.
    ///
    /// A key claimed by a user override means that override's action, or
    /// nothing if the screen doesn't understand it. Other keys resolve to the
    /// first action of `candidates` with a preset binding for the key, so a
    /// key shared between screens (`s`) means the local action.
    pub fn resolve(&self, key: &KeyEvent, candidates: &[Action]) -> Option<Action> {
        let overridden: Vec<Action> = self
            .overrides
            .iter()
            .filter(|b| b.matches(key.code, key.modifiers))
            .map(|b| b.action)
            .collect();
        if !overridden.is_empty() {
            return candidates
                .iter()
                .copied()
                .find(|action| overridden.contains(action));
        }

        let bindings = self.all_bindings();
        candidates.iter().copied().find(|action| {
            bindings
                .iter()
                .any(|b| b.action == *action && b.matches(key.code, key.modifiers))
        })
    }

    /// Get all bindings (overrides + preset) for display in help
    ///
    /// An override shadows every preset binding for the same action and every
    /// preset binding on the same key.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();

        for preset_binding in self.preset.bindings() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == preset_binding.action || o.same_key(&preset_binding));
            if !is_overridden {
                bindings.push(preset_binding);
            }
        }

        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "q")
    /// Checks overrides first, then preset. Returns generic fallback if not found.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        if let Some(binding) = self.all_bindings().iter().find(|b| b.action == action) {
            return binding.display();
        }

        // Fallback for actions not in current map (shouldn't happen for core actions)
        format!("{:?}", action)
    }

    /// Get the display string for navigation keys (up/down)
    pub fn navigation_display(&self) -> String {
        let up_key = self.get_key_display_for_action(Action::MoveUp);
        let down_key = self.get_key_display_for_action(Action::MoveDown);
        format!("{}/{}", up_key, down_key)
    }

    /// Footer text for the given actions: "key: description | key: description"
    pub fn help_line(&self, actions: &[Action]) -> String {
        actions
            .iter()
            .map(|action| match action {
                Action::MoveUp | Action::MoveDown => {
                    format!("{}: navigate", self.navigation_display())
                }
                _ => format!(
                    "{}: {}",
                    self.get_key_display_for_action(*action),
                    action.description()
                ),
            })
            .fold(Vec::<String>::new(), |mut parts, part| {
                // MoveUp and MoveDown collapse into one "navigate" entry
                if !parts.contains(&part) {
                    parts.push(part);
                }
                parts
            })
            .join(" | ")
    }
}
