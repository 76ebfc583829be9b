use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Help footer shared by all screens
pub struct Footer;

impl Footer {
    /// Render footer help text of the form "key: description | key: description"
    ///
    /// Keys are drawn in the help key style, descriptions muted, and the
    /// separators as " • ". Long help wraps onto following lines.
    pub fn render(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
        frame.render_widget(Self::paragraph(text, theme), area);
    }

    /// Rows needed to show `text` in `width` columns
    pub fn height(text: &str, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }
        let len = text.chars().count() as u16;
        len.div_ceil(width).max(1)
    }

    fn paragraph<'a>(text: &'a str, theme: &Theme) -> Paragraph<'a> {
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", theme.muted_style()));
            }

            // Split on ": " to separate keys from description
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(keys, theme.help_key_style()));
                spans.push(Span::styled(format!(" {}", label), theme.muted_style()));
            } else {
                spans.push(Span::styled(part, theme.muted_style()));
            }
        }

        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true })
    }
}
