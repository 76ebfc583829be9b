//! Filter text for selectable lists.
//!
//! Typed characters are appended at the end; there is no cursor movement inside
//! the filter, matching how lists are filtered while browsing.

/// Text typed into a list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    text: String,
}

impl FilterInput {
    /// Create a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the filter is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a character.
    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Delete the last character. Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Case-insensitive subsequence match: every filter character appears in
    /// `candidate` in order. An empty filter matches everything.
    pub fn matches(&self, candidate: &str) -> bool {
        let mut haystack = candidate.chars().flat_map(char::to_lowercase);
        self.text
            .trim()
            .chars()
            .flat_map(char::to_lowercase)
            .all(|needle| haystack.any(|c| c == needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(text: &str) -> FilterInput {
        let mut input = FilterInput::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_empty_matches_everything() {
        assert!(FilterInput::new().matches("Item 1"));
        assert!(filter("  ").matches("About"));
    }

    #[test]
    fn test_subsequence_match() {
        assert!(filter("abt").matches("About"));
        assert!(filter("it4").matches("Item 4"));
        assert!(!filter("tba").matches("About"));
        assert!(!filter("item 5").matches("Item 4"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(filter("ABOUT").matches("about"));
        assert!(filter("item").matches("ITEM 2"));
    }

    #[test]
    fn test_backspace() {
        let mut input = filter("ab");
        assert!(input.backspace());
        assert_eq!(input.text(), "a");
        assert!(input.backspace());
        assert!(!input.backspace());
        assert!(input.is_empty());
    }
}
