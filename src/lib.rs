//! Automata - a small routed terminal menu
//!
//! A list menu whose entries launch sub-screens (a countdown timer, an about
//! page, a secondary list). The router owns every screen, forwards each
//! message to the active one and applies navigation requests.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod router;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::{Config, EntryPolicy};
pub use router::Router;
pub use ui::{Msg, ScreenId, Tick};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
