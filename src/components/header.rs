use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Common frame for the full-screen pages (timer, about)
pub struct Header;

impl Header {
    /// Draw a rounded, titled border around `area` and return the inner area
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to frame
    /// * `title` - The title shown in the top border
    /// * `theme` - Active theme
    pub fn render(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focused_style())
            .title(Span::styled(format!(" {} ", title), theme.title_bar_style()))
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 1));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}
