//! Screen identities and the messages the host loop feeds to them.

use crossterm::event::KeyEvent;

/// Application screens.
///
/// The set is closed and fixed at startup; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Menu,
    Timer,
    Info,
    SubList,
}

impl ScreenId {
    /// Every screen, in roster order
    pub const ALL: [ScreenId; 4] = [
        ScreenId::Menu,
        ScreenId::Timer,
        ScreenId::Info,
        ScreenId::SubList,
    ];

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Menu => "menu",
            ScreenId::Timer => "timer",
            ScreenId::Info => "info",
            ScreenId::SubList => "sub-list",
        }
    }
}

/// A periodic tick addressed to one screen.
///
/// `tag` identifies the tick chain that scheduled it; a screen bumps its tag
/// whenever it restarts a chain, so ticks from an older chain are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub target: ScreenId,
    pub tag: u64,
}

/// Everything the host loop can deliver to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key press from the terminal
    Key(KeyEvent),
    /// The terminal was resized
    Resize { width: u16, height: u16 },
    /// A tick scheduled by an earlier [`crate::screens::Effect::ScheduleTick`]
    Tick(Tick),
    /// The host wants to stop (Ctrl+C)
    Quit,
}
