//! Static information page.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{Effect, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::ui::{Msg, ScreenId};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Fixed page with no internal transitions; only going back and quitting
/// are recognized.
#[derive(Debug, Clone)]
pub struct AboutScreen {
    heading: String,
    body: Vec<String>,
}

impl AboutScreen {
    pub fn new(heading: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            body,
        }
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new(
            "About",
            vec![
                "Automata".to_string(),
                String::new(),
                "Contact for Help/Support".to_string(),
                format!("Version {}", env!("CARGO_PKG_VERSION")),
            ],
        )
    }
}

impl Screen for AboutScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Info
    }

    fn init(&mut self, _ctx: &ScreenContext) -> Effect {
        Effect::None
    }

    fn update(&mut self, msg: &Msg, ctx: &ScreenContext) -> ScreenAction {
        match msg {
            Msg::Key(key) => match ctx.keymap.resolve(key, &[Action::Cancel, Action::Quit]) {
                Some(Action::Cancel) => ScreenAction::Navigate(ScreenId::Menu),
                Some(Action::Quit) => ScreenAction::Stay(Effect::Quit),
                _ => ScreenAction::none(),
            },
            Msg::Quit => ScreenAction::Stay(Effect::Quit),
            Msg::Tick(_) | Msg::Resize { .. } => ScreenAction::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = ctx.theme;
        let inner = Header::render(frame, area, &self.heading, t);

        let help = ctx.keymap.help_line(&[Action::Cancel, Action::Quit]);
        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(Footer::height(&help, inner.width)),
        ])
        .split(inner);

        let lines: Vec<Line> = self
            .body
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    t.emphasis_style()
                } else {
                    t.text_style()
                };
                Line::from(Span::styled(text.as_str(), style))
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
        Footer::render(frame, chunks[1], &help, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Keymap;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn send(screen: &mut AboutScreen, code: KeyCode) -> ScreenAction {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Rect::new(0, 0, 80, 24));
        screen.update(&Msg::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
    }

    #[test]
    fn test_only_cancel_and_quit_are_recognized() {
        let mut screen = AboutScreen::default();
        assert_eq!(send(&mut screen, KeyCode::Enter), ScreenAction::none());
        assert_eq!(send(&mut screen, KeyCode::Down), ScreenAction::none());
        assert_eq!(send(&mut screen, KeyCode::Char('a')), ScreenAction::none());
        assert_eq!(
            send(&mut screen, KeyCode::Esc),
            ScreenAction::Navigate(ScreenId::Menu)
        );
        assert_eq!(
            send(&mut screen, KeyCode::Char('q')),
            ScreenAction::Stay(Effect::Quit)
        );
    }
}
