//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "ctrl+c", "shift+tab", "j", "T".
//! Single characters keep their case: "T" and "t" are different keys, and
//! SHIFT is folded into the character when matching.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n", "shift+tab", "P")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Fold SHIFT into character keys so "P" matches both `Char('P')` and
    /// `Char('P') + SHIFT`, which is what terminals actually report.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers;
        if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self { code, modifiers }
    }
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => {
                ParsedKey::normalized(parsed.code, parsed.modifiers)
                    == ParsedKey::normalized(code, modifiers)
            }
            Err(_) => false,
        }
    }

    /// Whether both bindings are triggered by the same key combination
    pub fn same_key(&self, other: &KeyBinding) -> bool {
        match other.parse() {
            Ok(parsed) => self.matches(parsed.code, parsed.modifiers),
            Err(_) => false,
        }
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+N")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim();
    if key.is_empty() {
        return Err("Empty key".to_string());
    }
    // A bare "+" is the plus key, not a separator
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let parts: Vec<&str> = key.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if i == parts.len() - 1 {
            // Last part is the actual key
            key_part = part;
        } else {
            // Everything else is a modifier
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let mut code = parse_key_code(key_part)?;

    // "shift+g" is the same key as "G"
    if let KeyCode::Char(c) = code {
        if modifiers.contains(KeyModifiers::SHIFT) && c.is_ascii_alphabetic() {
            code = KeyCode::Char(c.to_ascii_uppercase());
        }
    }
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }

    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    // Single character keeps its case
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let key = key.trim().to_lowercase();

    match key.as_str() {
        // Navigation keys
        "up" | "arrow_up" => Ok(KeyCode::Up),
        "down" | "arrow_down" => Ok(KeyCode::Down),
        "left" | "arrow_left" => Ok(KeyCode::Left),
        "right" | "arrow_right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "page_up" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "page_down" | "pgdn" => Ok(KeyCode::PageDown),

        // Action keys
        "enter" | "return" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "insert" | "ins" => Ok(KeyCode::Insert),

        // Function keys
        f if f.starts_with('f') => f[1..]
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| format!("Unknown key: {}", key)),

        _ => Err(format!("Unknown key: {}", key)),
    }
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+N")
pub fn format_key_display(key: &str) -> String {
    let parts: Vec<&str> = key.split('+').collect();
    let last = parts.len().saturating_sub(1);
    let formatted: Vec<String> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let raw = part.trim();
            let part = raw.to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                // The key itself keeps its case; a modified letter reads as upper case
                _ if raw.chars().count() == 1 && (i < last || parts.len() == 1) => raw.to_string(),
                _ if raw.chars().count() == 1 => raw.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect();

    formatted.join("+")
}
