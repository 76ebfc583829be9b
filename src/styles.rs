//! Theme and style system for automata
//!
//! Provides consistent styling across the screens with support for
//! light, dark and colorless terminals. Styles are plain values: screens
//! receive the active [`Theme`] through their render context.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Selection indicator drawn on the left edge of the selected entry
pub const SELECTION_BAR: &str = "▌";

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Accents ===
    /// Main accent color (borders, selection bar)
    pub primary: Color,
    /// Title pill foreground
    pub title_fg: Color,
    /// Title pill background
    pub title_bg: Color,

    // === Semantic Colors ===
    /// Status messages ("You chose ...")
    pub status: Color,
    /// Expired timer
    pub warning: Color,

    // === Text Colors ===
    /// Main text color
    pub text: Color,
    /// Muted/secondary text (descriptions, help)
    pub text_muted: Color,
    /// Emphasized text (filter input, countdown)
    pub text_emphasis: Color,

    // === UI Colors ===
    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: Color::Rgb(0xEE, 0x6F, 0xF8),
            title_fg: Color::Rgb(0xFF, 0xFD, 0xF5),
            title_bg: Color::Rgb(0x25, 0xA0, 0x65),

            status: Color::Rgb(0x04, 0xB5, 0x75),
            warning: Color::Yellow,

            text: Color::White,
            text_muted: Color::Indexed(241),
            text_emphasis: Color::Indexed(204),

            border: Color::DarkGray,
            border_focused: Color::Rgb(0xEE, 0x6F, 0xF8),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            primary: Color::Rgb(0xF7, 0x93, 0xFF),
            title_fg: Color::Rgb(0xFF, 0xFD, 0xF5),
            title_bg: Color::Rgb(0x25, 0xA0, 0x65),

            status: Color::Rgb(0x04, 0xB5, 0x75),
            warning: Color::Rgb(180, 120, 0), // Darker yellow/orange

            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,

            border: Color::DarkGray,
            border_focused: Color::Rgb(0xF7, 0x93, 0xFF),
        }
    }

    /// No-color theme - for terminals where colors should be disabled
    ///
    /// Note: In this mode, style helpers below avoid setting fg/bg so the UI
    /// uses the terminal defaults without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,

            primary: Color::Reset,
            title_fg: Color::Reset,
            title_bg: Color::Reset,

            status: Color::Reset,
            warning: Color::Reset,

            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,

            border: Color::Reset,
            border_focused: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for the title pill at the top of a list
    pub fn title_bar_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default().fg(self.title_fg).bg(self.title_bg)
    }

    /// Style for headings inside a screen
    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (filter input, countdown)
    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.text_emphasis)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for status messages
    pub fn status_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.status)
    }

    /// Style for the expired timer message
    pub fn warning_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected entry's title
    pub fn selected_title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected entry's description
    pub fn selected_description_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.primary)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for help keys in the footer
    pub fn help_key_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_muted).add_modifier(Modifier::BOLD)
    }
}
