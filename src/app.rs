//! Host loop: terminal events and due ticks in, router effects out.

use crate::config::Config;
use crate::router::Router;
use crate::screens::Effect;
use crate::tui::Tui;
use crate::ui::{Msg, Tick};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Longest wait for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Deadline queue of scheduled ticks.
///
/// Entries are ordered by deadline, then by the order they were scheduled in.
#[derive(Debug, Default)]
pub struct TickQueue {
    heap: BinaryHeap<Reverse<(Instant, u64)>>,
    ticks: HashMap<u64, Tick>,
    next_seq: u64,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `tick` to fire `after` from `now`.
    pub fn push(&mut self, after: Duration, tick: Tick, now: Instant) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(Reverse((now + after, seq)));
        self.ticks.insert(seq, tick);
    }

    /// Remove and return every tick due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<Tick> {
        let mut due = Vec::new();
        while let Some(Reverse((deadline, seq))) = self.heap.peek().copied() {
            if deadline > now {
                break;
            }
            self.heap.pop();
            if let Some(tick) = self.ticks.remove(&seq) {
                due.push(tick);
            }
        }
        due
    }

    /// Deadline of the earliest pending tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse((deadline, _))| *deadline)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Translate a terminal event into a router message.
///
/// Only key presses count; Ctrl+C always quits.
pub fn map_event(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(map_key(key)),
        Event::Resize(width, height) => Some(Msg::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Msg {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Msg::Quit;
    }
    Msg::Key(key)
}

/// Queue the ticks an effect asks for. Returns whether it asks to quit.
pub fn schedule(queue: &mut TickQueue, effect: &Effect, now: Instant) -> bool {
    for (after, tick) in effect.scheduled_ticks() {
        debug!("Scheduling tick for {} in {:?}", tick.target.name(), after);
        queue.push(after, tick, now);
    }
    effect.wants_quit()
}

/// Outcome of one batch of due ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fired {
    /// Ticks handed to the router
    pub dispatched: usize,
    pub quit: bool,
}

/// Dispatch every tick due at `now` and queue the ticks they schedule.
pub fn fire_due(router: &mut Router, queue: &mut TickQueue, now: Instant) -> Fired {
    let mut fired = Fired::default();
    for tick in queue.pop_due(now) {
        let effect = router.dispatch(Msg::Tick(tick));
        fired.dispatched += 1;
        fired.quit |= schedule(queue, &effect, now);
    }
    fired
}

/// Main application: router, terminal and pending ticks.
pub struct App {
    router: Router,
    tui: Tui,
    queue: TickQueue,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let router = Router::from_config(config)?;
        let tui = Tui::new()?;
        Ok(Self {
            router,
            tui,
            queue: TickQueue::new(),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        if let Err(e) = &result {
            error!("Event loop failed: {:#}", e);
        }
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let size = self.tui.size()?;
        self.router.dispatch(Msg::Resize {
            width: size.width,
            height: size.height,
        });
        let effect = self.router.start();
        self.realize(effect, Instant::now());

        while !self.should_quit {
            self.draw()?;

            let fired = fire_due(&mut self.router, &mut self.queue, Instant::now());
            if fired.quit {
                self.should_quit = true;
                break;
            }
            if fired.dispatched > 0 {
                self.draw()?;
            }

            let timeout = self
                .queue
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if let Some(msg) = self.tui.poll_event(timeout)?.and_then(map_event) {
                let effect = self.router.dispatch(msg);
                self.realize(effect, Instant::now());
            }
        }

        info!("Exiting from {}", self.router.active().name());
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let router = &self.router;
        self.tui
            .terminal_mut()
            .draw(|frame| router.render(frame))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Turn an effect into scheduled ticks or a quit.
    fn realize(&mut self, effect: Effect, now: Instant) {
        if schedule(&mut self.queue, &effect, now) {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScreenId;

    fn tick(tag: u64) -> Tick {
        Tick {
            target: ScreenId::Timer,
            tag,
        }
    }

    #[test]
    fn test_queue_pops_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TickQueue::new();
        queue.push(Duration::from_secs(2), tick(2), now);
        queue.push(Duration::from_secs(1), tick(1), now);
        queue.push(Duration::from_secs(3), tick(3), now);

        assert_eq!(queue.next_deadline(), Some(now + Duration::from_secs(1)));
        assert!(queue.pop_due(now).is_empty());

        let due = queue.pop_due(now + Duration::from_secs(2));
        assert_eq!(due, vec![tick(1), tick(2)]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_keeps_schedule_order_for_equal_deadlines() {
        let now = Instant::now();
        let mut queue = TickQueue::new();
        queue.push(Duration::ZERO, tick(7), now);
        queue.push(Duration::ZERO, tick(5), now);
        assert_eq!(queue.pop_due(now), vec![tick(7), tick(5)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_map_event() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(Event::Key(ctrl_c)), Some(Msg::Quit));

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event(Event::Key(q)), Some(Msg::Key(q)));

        let mut release = q;
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);

        assert_eq!(
            map_event(Event::Resize(100, 30)),
            Some(Msg::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn test_fire_due_reports_dispatched_ticks() {
        let now = Instant::now();
        let mut router = Router::from_config(&Config::default()).unwrap();
        let mut queue = TickQueue::new();
        schedule(&mut queue, &router.start(), now);

        // Launch the timer; its first tick is queued one interval out
        for code in [KeyCode::Down, KeyCode::Enter] {
            let effect = router.dispatch(Msg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
            schedule(&mut queue, &effect, now);
        }
        let interval = router.timer().interval();
        let before = router.render_text(60, 20).unwrap();

        assert_eq!(fire_due(&mut router, &mut queue, now), Fired::default());

        let fired = fire_due(&mut router, &mut queue, now + interval);
        assert_eq!(fired.dispatched, 1);
        assert!(!fired.quit);
        assert_eq!(router.timer().remaining(), router.timer().duration() - interval);
        // The next tick of the chain is queued and the page has changed
        assert_eq!(queue.len(), 1);
        assert_ne!(router.render_text(60, 20).unwrap(), before);
    }

    #[test]
    fn test_schedule_reports_quit() {
        let now = Instant::now();
        let mut queue = TickQueue::new();
        let effect = Effect::batch(vec![
            Effect::ScheduleTick {
                after: Duration::from_millis(5),
                tick: tick(1),
            },
            Effect::Quit,
        ]);
        assert!(schedule(&mut queue, &effect, now));
        assert_eq!(queue.len(), 1);
        assert!(!schedule(&mut queue, &Effect::None, now));
    }
}
