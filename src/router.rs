//! Screen router: owns every screen, tracks which one is active and applies
//! navigation requests.
//!
//! The router is pure with respect to the terminal. It consumes [`Msg`]s and
//! returns the [`Effect`] the host loop should realize, which keeps every
//! transition testable without a terminal or a clock.

use crate::config::{Config, EntryPolicy};
use crate::keymap::Keymap;
use crate::screens::{
    AboutScreen, Effect, ListOptions, ListScreen, MenuEntry, RenderContext, Route, Screen,
    ScreenAction, ScreenContext, TimerScreen,
};
use crate::styles::Theme;
use crate::ui::{Msg, ScreenId};
use anyhow::{ensure, Context, Result};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

/// Title of the main menu
pub const MENU_TITLE: &str = "Automata";

/// Entries of the main menu, in display order
pub fn default_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Item 1", "Descrpiption item 1"),
        MenuEntry::new("Item 2", "Description item 2"),
        MenuEntry::new("Item 3", "Description item 3"),
        MenuEntry::new("Item 4", "Description item 4"),
        MenuEntry::new("About", "Contact for Help/Support"),
    ]
}

/// Menu positions that launch a sub-screen. Positions 2 and 3 are unrouted.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new(0, ScreenId::SubList),
        Route::new(1, ScreenId::Timer),
        Route::new(4, ScreenId::Info),
    ]
}

/// Entries of the secondary list
pub fn default_sub_list_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Sub item 1", "First entry of the secondary list"),
        MenuEntry::new("Sub item 2", "Second entry of the secondary list"),
        MenuEntry::new("Sub item 3", "Third entry of the secondary list"),
    ]
}

/// The fixed set of screens, one per [`ScreenId`].
#[derive(Debug, Clone)]
pub struct Roster {
    pub menu: ListScreen,
    pub timer: TimerScreen,
    pub info: AboutScreen,
    pub sub_list: ListScreen,
}

impl Roster {
    pub fn get(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::Menu => &self.menu,
            ScreenId::Timer => &self.timer,
            ScreenId::Info => &self.info,
            ScreenId::SubList => &self.sub_list,
        }
    }

    pub fn get_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::Menu => &mut self.menu,
            ScreenId::Timer => &mut self.timer,
            ScreenId::Info => &mut self.info,
            ScreenId::SubList => &mut self.sub_list,
        }
    }

    /// Check that every slot holds the screen it is named for.
    pub fn validate(&self) -> Result<()> {
        for id in ScreenId::ALL {
            let found = self.get(id).id();
            ensure!(
                found == id,
                "Roster slot {} holds the {} screen",
                id.name(),
                found.name()
            );
        }
        Ok(())
    }
}

/// View-routing state machine.
#[derive(Debug, Clone)]
pub struct Router {
    roster: Roster,
    active: ScreenId,
    policy: EntryPolicy,
    keymap: Keymap,
    theme: Theme,
    viewport: Rect,
}

impl Router {
    /// Build a router over an explicit roster. The menu starts active but is
    /// not initialized until [`Router::start`].
    pub fn new(roster: Roster, policy: EntryPolicy, keymap: Keymap, theme: Theme) -> Result<Self> {
        roster.validate()?;
        Ok(Self {
            roster,
            active: ScreenId::Menu,
            policy,
            keymap,
            theme,
            viewport: Rect::new(0, 0, 80, 24),
        })
    }

    /// Build the application's roster from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let options = ListOptions::from(config.menu);

        let menu = ListScreen::new(ScreenId::Menu, MENU_TITLE, default_menu_entries())
            .with_options(options)
            .with_spinner_interval(config.spinner_interval())
            .with_routes(default_routes())
            .context("Invalid menu route table")?;

        let sub_list = ListScreen::new(ScreenId::SubList, "Sub List", default_sub_list_entries())
            .with_options(options)
            .with_spinner_interval(config.spinner_interval())
            .with_back(ScreenId::Menu);

        let roster = Roster {
            menu,
            timer: TimerScreen::new(config.timer.duration(), config.timer.tick()),
            info: AboutScreen::default(),
            sub_list,
        };

        Self::new(
            roster,
            config.entry_policy,
            config.keymap.clone(),
            Theme::new(config.theme_type()),
        )
    }

    /// Activate the menu and return its startup effect.
    pub fn start(&mut self) -> Effect {
        info!("Starting at {}", ScreenId::Menu.name());
        self.activate(ScreenId::Menu)
    }

    /// Make `id` the active screen, initializing or resuming it.
    pub fn activate(&mut self, id: ScreenId) -> Effect {
        let from = self.active;
        self.active = id;

        let reset = id == ScreenId::Menu || self.policy == EntryPolicy::Reset;
        let ctx = ScreenContext::new(&self.keymap, self.viewport);
        let screen = self.roster.get_mut(id);
        debug_assert_eq!(screen.id(), id);
        let effect = if reset {
            screen.init(&ctx)
        } else {
            screen.resume(&ctx)
        };

        info!(
            "Activated {} (from {}, {})",
            id.name(),
            from.name(),
            if reset { "reset" } else { "resumed" }
        );
        effect
    }

    /// Route one message to the active screen and apply its answer.
    pub fn dispatch(&mut self, msg: Msg) -> Effect {
        match &msg {
            Msg::Quit => {
                debug!("Quit requested by host");
                return Effect::Quit;
            }
            Msg::Resize { width, height } => {
                self.viewport = Rect::new(0, 0, *width, *height);
            }
            Msg::Tick(tick) if tick.target != self.active => {
                debug!(
                    "Dropping tick for inactive {} (active: {})",
                    tick.target.name(),
                    self.active.name()
                );
                return Effect::None;
            }
            _ => {}
        }

        let ctx = ScreenContext::new(&self.keymap, self.viewport);
        let action = self.roster.get_mut(self.active).update(&msg, &ctx);

        match action {
            ScreenAction::Stay(effect) => effect,
            ScreenAction::Navigate(target) => {
                debug!("{} -> {}", self.active.name(), target.name());
                self.activate(target)
            }
        }
    }

    /// Draw the active screen over the whole frame.
    pub fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext::new(&self.keymap, &self.theme);
        let area = frame.area();
        self.roster.get(self.active).render(frame, area, &ctx);
    }

    /// Render the active screen off-screen and return its text, one line per row.
    pub fn render_text(&self, width: u16, height: u16) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))
            .context("Failed to create test terminal")?;
        terminal
            .draw(|frame| self.render(frame))
            .context("Failed to draw frame")?;

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            if y > area.top() {
                text.push('\n');
            }
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
        }
        Ok(text)
    }

    pub fn active(&self) -> ScreenId {
        self.active
    }

    pub fn policy(&self) -> EntryPolicy {
        self.policy
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn menu(&self) -> &ListScreen {
        &self.roster.menu
    }

    pub fn timer(&self) -> &TimerScreen {
        &self.roster.timer
    }

    pub fn sub_list(&self) -> &ListScreen {
        &self.roster.sub_list
    }

    pub fn info(&self) -> &AboutScreen {
        &self.roster.info
    }
}
