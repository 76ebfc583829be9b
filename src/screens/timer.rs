//! Countdown timer screen.
//!
//! The timer never reads a clock. It asks the host for a tick every
//! `interval` and subtracts one interval per accepted tick, so a countdown
//! of duration D after N accepted ticks shows `max(0, D - N * interval)`.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{Effect, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::ui::{Msg, ScreenId, Tick};
use crate::utils::format_countdown;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use std::time::Duration;
use tracing::debug;

/// Message shown once the countdown reaches zero
pub const EXPIRED_MESSAGE: &str = "Timer expired!";

const TIMER_ACTIONS: [Action; 5] = [
    Action::Reset,
    Action::ToggleTimer,
    Action::Cancel,
    Action::Quit,
    Action::Help,
];

/// Countdown timer controller.
#[derive(Debug, Clone)]
pub struct TimerScreen {
    duration: Duration,
    interval: Duration,
    remaining: Duration,
    running: bool,
    /// Generation of the current tick chain
    tag: u64,
    full_help: bool,
}

impl TimerScreen {
    /// Create a timer counting down `duration` in steps of `interval`.
    ///
    /// A zero interval is treated as one millisecond.
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            duration,
            interval: interval.max(Duration::from_millis(1)),
            remaining: duration,
            running: false,
            tag: 0,
            full_help: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// The tick the timer is currently waiting for
    pub fn current_tick(&self) -> Tick {
        Tick {
            target: ScreenId::Timer,
            tag: self.tag,
        }
    }

    /// Start a new tick chain, invalidating any tick in flight.
    fn restart_chain(&mut self) -> Effect {
        self.tag = self.tag.wrapping_add(1);
        if self.running && !self.expired() {
            self.schedule()
        } else {
            Effect::None
        }
    }

    fn schedule(&self) -> Effect {
        Effect::ScheduleTick {
            after: self.interval,
            tick: self.current_tick(),
        }
    }

    fn handle_tick(&mut self, tick: Tick) -> ScreenAction {
        if tick != self.current_tick() || !self.running || self.expired() {
            return ScreenAction::none();
        }

        self.remaining = self.remaining.saturating_sub(self.interval);
        if self.expired() {
            debug!("timer expired");
            self.running = false;
            return ScreenAction::none();
        }
        ScreenAction::Stay(self.schedule())
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Reset => {
                self.remaining = self.duration;
                ScreenAction::Stay(self.restart_chain())
            }
            Action::ToggleTimer => {
                if self.expired() {
                    return ScreenAction::none();
                }
                self.running = !self.running;
                debug!(running = self.running, "timer toggled");
                ScreenAction::Stay(self.restart_chain())
            }
            Action::Cancel => ScreenAction::Navigate(ScreenId::Menu),
            Action::Quit => ScreenAction::Stay(Effect::Quit),
            Action::Help => {
                self.full_help = !self.full_help;
                ScreenAction::none()
            }
            _ => ScreenAction::none(),
        }
    }

    fn help_actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::ToggleTimer, Action::Reset, Action::Cancel];
        if self.full_help {
            actions.push(Action::Quit);
        }
        actions.push(Action::Help);
        actions
    }
}

impl Screen for TimerScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Timer
    }

    fn init(&mut self, _ctx: &ScreenContext) -> Effect {
        self.remaining = self.duration;
        self.running = true;
        self.full_help = false;
        self.restart_chain()
    }

    fn resume(&mut self, _ctx: &ScreenContext) -> Effect {
        self.restart_chain()
    }

    fn update(&mut self, msg: &Msg, ctx: &ScreenContext) -> ScreenAction {
        match msg {
            Msg::Key(key) => match ctx.keymap.resolve(key, &TIMER_ACTIONS) {
                Some(action) => self.handle_action(action),
                None => ScreenAction::none(),
            },
            Msg::Tick(tick) => self.handle_tick(*tick),
            Msg::Resize { .. } => ScreenAction::none(),
            Msg::Quit => ScreenAction::Stay(Effect::Quit),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = ctx.theme;
        let inner = Header::render(frame, area, "Timer", t);

        let help = ctx.keymap.help_line(&self.help_actions());
        let help_height = Footer::height(&help, inner.width);
        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(help_height),
        ])
        .split(inner);

        let mut lines = Vec::new();
        if self.expired() {
            lines.push(Line::from(Span::styled(EXPIRED_MESSAGE, t.warning_style())));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Exiting in ", t.text_style()),
                Span::styled(format_countdown(self.remaining), t.emphasis_style()),
            ]));
            lines.push(Line::from(""));
            let state = if self.running { "running" } else { "paused" };
            lines.push(Line::from(Span::styled(state, t.muted_style())));
        }

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

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn with_ctx<R>(f: impl FnOnce(&ScreenContext) -> R) -> R {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Rect::new(0, 0, 80, 24));
        f(&ctx)
    }

    fn press(timer: &mut TimerScreen, c: char) -> ScreenAction {
        with_ctx(|ctx| {
            timer.update(
                &Msg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                ctx,
            )
        })
    }

    fn tick(timer: &mut TimerScreen, tick: Tick) -> ScreenAction {
        with_ctx(|ctx| timer.update(&Msg::Tick(tick), ctx))
    }

    fn started(duration: Duration) -> (TimerScreen, Effect) {
        let mut timer = TimerScreen::new(duration, secs(1));
        let effect = with_ctx(|ctx| timer.init(ctx));
        (timer, effect)
    }

    #[test]
    fn test_init_schedules_first_tick() {
        let (timer, effect) = started(secs(60));
        assert!(timer.running());
        assert_eq!(timer.remaining(), secs(60));
        assert_eq!(
            effect,
            Effect::ScheduleTick {
                after: secs(1),
                tick: timer.current_tick()
            }
        );
    }

    #[test]
    fn test_accepted_ticks_count_down_and_stop_at_zero() {
        let (mut timer, _) = started(secs(3));
        let current = timer.current_tick();

        assert!(matches!(tick(&mut timer, current), ScreenAction::Stay(Effect::ScheduleTick { .. })));
        assert_eq!(timer.remaining(), secs(2));
        tick(&mut timer, current);
        assert_eq!(tick(&mut timer, current), ScreenAction::none());
        assert!(timer.expired());
        assert!(!timer.running());

        // Further ticks are ignored
        tick(&mut timer, current);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_countdown_floors_at_zero_with_uneven_interval() {
        let mut timer = TimerScreen::new(Duration::from_millis(2500), secs(1));
        with_ctx(|ctx| timer.init(ctx));
        for _ in 0..5 {
            let current = timer.current_tick();
            tick(&mut timer, current);
        }
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let (mut timer, _) = started(secs(10));
        let stale = timer.current_tick();
        press(&mut timer, 'r');
        assert_ne!(stale, timer.current_tick());

        tick(&mut timer, stale);
        assert_eq!(timer.remaining(), secs(10));
    }

    #[test]
    fn test_toggle_stops_and_restarts() {
        let (mut timer, _) = started(secs(10));
        let before = timer.current_tick();

        assert_eq!(press(&mut timer, 's'), ScreenAction::none());
        assert!(!timer.running());
        tick(&mut timer, before);
        assert_eq!(timer.remaining(), secs(10));

        let ScreenAction::Stay(effect) = press(&mut timer, 's') else {
            panic!("toggle should not navigate");
        };
        assert!(timer.running());
        assert_eq!(effect.scheduled_ticks(), vec![(secs(1), timer.current_tick())]);
    }

    #[test]
    fn test_reset_restores_duration() {
        let (mut timer, _) = started(secs(5));
        let current = timer.current_tick();
        tick(&mut timer, current);
        tick(&mut timer, current);
        assert_eq!(timer.remaining(), secs(3));

        press(&mut timer, 'r');
        assert_eq!(timer.remaining(), secs(5));
    }

    #[test]
    fn test_cancel_and_quit() {
        let (mut timer, _) = started(secs(5));
        let esc = with_ctx(|ctx| {
            timer.update(&Msg::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), ctx)
        });
        assert_eq!(esc, ScreenAction::Navigate(ScreenId::Menu));
        assert_eq!(press(&mut timer, 'q'), ScreenAction::Stay(Effect::Quit));
    }

    #[test]
    fn test_resume_reschedules_only_when_running() {
        let (mut timer, _) = started(secs(5));
        let effect = with_ctx(|ctx| timer.resume(ctx));
        assert_eq!(effect.scheduled_ticks().len(), 1);

        press(&mut timer, 's');
        let effect = with_ctx(|ctx| timer.resume(ctx));
        assert!(effect.is_none());
    }
}
