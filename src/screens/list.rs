//! Selectable list screen.
//!
//! Backs both the main menu and the secondary list. Entries are fixed at
//! construction; the cursor, filter and display toggles are screen state.
//! A menu carries a route table mapping entry positions to the screens they
//! launch; confirming an entry without a route only reports the choice.

use crate::components::Footer;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{Effect, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::ui::{Msg, ScreenId, Tick};
use crate::utils::{FilterInput, ListStateExt};
use crate::widgets::{EntryList, EntryRow};
use anyhow::{ensure, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, ListState, Padding, Paragraph};
use std::time::Duration;
use tracing::debug;

/// Spinner animation frames
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Actions a list understands outside of filter typing, in resolution order
const LIST_ACTIONS: [Action; 17] = [
    Action::MoveUp,
    Action::MoveDown,
    Action::PageUp,
    Action::PageDown,
    Action::GoToTop,
    Action::GoToEnd,
    Action::Confirm,
    Action::Launch,
    Action::Cancel,
    Action::Search,
    Action::Quit,
    Action::Help,
    Action::ToggleSpinner,
    Action::ToggleTitleBar,
    Action::ToggleStatusBar,
    Action::TogglePagination,
    Action::ToggleHelp,
];

/// A menu entry. Immutable once constructed; its position in the list is
/// what routes refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    title: String,
    description: String,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Entry position → screen launched when that entry is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub index: usize,
    pub target: ScreenId,
}

impl Route {
    pub const fn new(index: usize, target: ScreenId) -> Self {
        Self { index, target }
    }
}

/// Where the filter is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No filter; every entry is visible
    #[default]
    Unfiltered,
    /// The user is typing the filter text
    Filtering,
    /// The filter text is fixed and narrows the list
    FilterApplied,
}

/// Render-only display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub show_title: bool,
    pub show_status_bar: bool,
    pub show_pagination: bool,
    pub show_help: bool,
    pub show_spinner: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            show_status_bar: true,
            show_pagination: true,
            show_help: true,
            show_spinner: false,
        }
    }
}

impl From<crate::config::MenuConfig> for ListOptions {
    fn from(menu: crate::config::MenuConfig) -> Self {
        Self {
            show_title: menu.show_title,
            show_status_bar: menu.show_status_bar,
            show_pagination: menu.show_pagination,
            show_help: menu.show_help,
            show_spinner: menu.show_spinner,
        }
    }
}

/// Areas of the list layout; `None` for hidden sections
struct Sections {
    title: Option<Rect>,
    status: Option<Rect>,
    entries: Rect,
    pagination: Option<Rect>,
    help: Option<Rect>,
}

/// Selectable list screen controller.
#[derive(Debug, Clone)]
pub struct ListScreen {
    id: ScreenId,
    title: String,
    entries: Vec<MenuEntry>,
    routes: Vec<Route>,
    /// Screen the Cancel action returns to
    back: Option<ScreenId>,
    defaults: ListOptions,
    spinner_interval: Duration,

    options: ListOptions,
    filtering_enabled: bool,
    full_help: bool,
    state: ListState,
    filter_state: FilterState,
    filter: FilterInput,
    /// Cursor before filtering began, restored when the filter is dropped
    saved_cursor: Option<usize>,
    status: Option<String>,
    spinner_frame: usize,
    spinner_tag: u64,
}

impl ListScreen {
    /// Create a list without routes.
    pub fn new(id: ScreenId, title: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        let mut state = ListState::default();
        state.cursor_first(entries.len());
        Self {
            id,
            title: title.into(),
            entries,
            routes: Vec::new(),
            back: None,
            defaults: ListOptions::default(),
            spinner_interval: Duration::from_millis(100),
            options: ListOptions::default(),
            filtering_enabled: true,
            full_help: false,
            state,
            filter_state: FilterState::Unfiltered,
            filter: FilterInput::new(),
            saved_cursor: None,
            status: None,
            spinner_frame: 0,
            spinner_tag: 0,
        }
    }

    /// Attach the route table.
    ///
    /// Every route must point at an existing entry, no entry may be routed
    /// twice, and a list cannot route to itself.
    pub fn with_routes(mut self, routes: Vec<Route>) -> Result<Self> {
        for (i, route) in routes.iter().enumerate() {
            ensure!(
                route.index < self.entries.len(),
                "route to {} uses entry {} but the {} list has {} entries",
                route.target.name(),
                route.index,
                self.id.name(),
                self.entries.len()
            );
            ensure!(
                !routes[..i].iter().any(|r| r.index == route.index),
                "entry {} of the {} list is routed twice",
                route.index,
                self.id.name()
            );
            ensure!(
                route.target != self.id,
                "the {} list cannot route to itself",
                self.id.name()
            );
        }
        self.routes = routes;
        Ok(self)
    }

    /// Make Cancel return to `target` when no filter is active.
    pub fn with_back(mut self, target: ScreenId) -> Self {
        self.back = Some(target);
        self
    }

    /// Display toggles applied on every initialization.
    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.defaults = options;
        self.options = options;
        self.filtering_enabled = options.show_title;
        self
    }

    pub fn with_spinner_interval(mut self, interval: Duration) -> Self {
        self.spinner_interval = interval;
        self
    }

    // ---- read access ----

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Cursor position within the visible (possibly filtered) entries
    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Position in `entries` of the entry under the cursor
    pub fn selected_index(&self) -> Option<usize> {
        let visible = self.visible();
        self.state
            .selected()
            .and_then(|cursor| visible.get(cursor).copied())
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    pub fn options(&self) -> ListOptions {
        self.options
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn full_help(&self) -> bool {
        self.full_help
    }

    /// The tick that currently advances the spinner
    pub fn spinner_tick(&self) -> Tick {
        Tick {
            target: self.id,
            tag: self.spinner_tag,
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Screen launched by the entry at `index`, if any
    pub fn target_for(&self, index: usize) -> Option<ScreenId> {
        self.routes
            .iter()
            .find(|route| route.index == index)
            .map(|route| route.target)
    }

    /// Indices into `entries` currently shown
    fn visible(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                self.filter_state == FilterState::Unfiltered || self.filter.matches(&entry.title)
            })
            .map(|(i, _)| i)
            .collect()
    }

    // ---- transitions ----

    fn handle_key(&mut self, key: &KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        if self.filter_state == FilterState::Filtering {
            self.handle_filter_key(key, ctx.keymap);
            return ScreenAction::none();
        }

        let Some(action) = ctx.keymap.resolve(key, &LIST_ACTIONS) else {
            return ScreenAction::none();
        };
        let total = self.visible().len();

        match action {
            Action::MoveUp => {
                self.state.step(-1, total);
                self.status = None;
            }
            Action::MoveDown => {
                self.state.step(1, total);
                self.status = None;
            }
            Action::PageUp => {
                let page = self.page_size(ctx);
                self.state.step_pages(-1, page, total);
                self.status = None;
            }
            Action::PageDown => {
                let page = self.page_size(ctx);
                self.state.step_pages(1, page, total);
                self.status = None;
            }
            Action::GoToTop => self.state.cursor_first(total),
            Action::GoToEnd => self.state.cursor_last(total),
            Action::Confirm | Action::Launch => return self.launch(),
            Action::Cancel => return self.cancel(),
            Action::Search => {
                if self.filtering_enabled {
                    self.start_filter();
                }
            }
            Action::Quit => return ScreenAction::Stay(Effect::Quit),
            Action::Help => self.full_help = !self.full_help,
            Action::ToggleSpinner => return ScreenAction::Stay(self.toggle_spinner()),
            Action::ToggleTitleBar => {
                let show = !self.options.show_title;
                self.options.show_title = show;
                self.filtering_enabled = show;
                if !show && self.filter_state != FilterState::Unfiltered {
                    self.reset_filter();
                }
            }
            Action::ToggleStatusBar => {
                self.options.show_status_bar = !self.options.show_status_bar;
            }
            Action::TogglePagination => {
                self.options.show_pagination = !self.options.show_pagination;
            }
            Action::ToggleHelp => self.options.show_help = !self.options.show_help,
            _ => {}
        }

        ScreenAction::none()
    }

    /// While typing a filter only text, Backspace, Confirm and Cancel count.
    fn handle_filter_key(&mut self, key: &KeyEvent, keymap: &Keymap) {
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.filter.insert_char(c);
                self.state = ListState::default();
                self.state.cursor_first(self.visible().len());
                return;
            }
        }

        match keymap.resolve(key, &[Action::Cancel, Action::Confirm, Action::Backspace]) {
            Some(Action::Cancel) => self.reset_filter(),
            Some(Action::Confirm) => self.apply_filter(),
            Some(Action::Backspace) => {
                if self.filter.backspace() {
                    self.state = ListState::default();
                    self.state.cursor_first(self.visible().len());
                }
            }
            _ => {}
        }
    }

    fn start_filter(&mut self) {
        if self.filter_state == FilterState::Unfiltered {
            self.saved_cursor = self.state.selected();
        }
        self.filter_state = FilterState::Filtering;
        self.status = None;
        self.state.clamp_to(self.visible().len());
    }

    fn apply_filter(&mut self) {
        if self.filter.is_empty() {
            self.reset_filter();
        } else {
            self.filter_state = FilterState::FilterApplied;
        }
    }

    fn reset_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        if let Some(cursor) = self.saved_cursor.take() {
            self.state.select(Some(cursor));
        }
        self.state.clamp_to(self.entries.len());
    }

    fn cancel(&mut self) -> ScreenAction {
        if self.filter_state == FilterState::FilterApplied {
            self.reset_filter();
            return ScreenAction::none();
        }
        match self.back {
            Some(target) => ScreenAction::Navigate(target),
            None => ScreenAction::none(),
        }
    }

    fn launch(&mut self) -> ScreenAction {
        let Some(index) = self.selected_index() else {
            return ScreenAction::none();
        };

        if let Some(target) = self.target_for(index) {
            debug!("{}: entry {} launches {}", self.id.name(), index, target.name());
            return ScreenAction::Navigate(target);
        }

        if let Some(entry) = self.entries.get(index) {
            self.status = Some(format!("You chose {}", entry.title));
        }
        ScreenAction::none()
    }

    fn toggle_spinner(&mut self) -> Effect {
        self.options.show_spinner = !self.options.show_spinner;
        if self.options.show_spinner {
            self.start_spinner()
        } else {
            // Invalidate the tick already in flight
            self.spinner_tag = self.spinner_tag.wrapping_add(1);
            Effect::None
        }
    }

    fn start_spinner(&mut self) -> Effect {
        self.spinner_tag = self.spinner_tag.wrapping_add(1);
        self.schedule_spinner()
    }

    fn schedule_spinner(&self) -> Effect {
        Effect::ScheduleTick {
            after: self.spinner_interval,
            tick: self.spinner_tick(),
        }
    }

    fn handle_tick(&mut self, tick: Tick) -> ScreenAction {
        if tick != self.spinner_tick() || !self.options.show_spinner {
            return ScreenAction::none();
        }
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        ScreenAction::Stay(self.schedule_spinner())
    }

    // ---- layout ----

    fn page_size(&self, ctx: &ScreenContext) -> usize {
        let sections = self.sections(ctx.viewport, ctx.keymap);
        EntryList::capacity(sections.entries.height)
    }

    fn help_text(&self, keymap: &Keymap) -> String {
        if self.filter_state == FilterState::Filtering {
            return format!(
                "{}: apply filter | {}: cancel",
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::Cancel)
            );
        }

        let mut actions = vec![Action::MoveUp, Action::MoveDown];
        if self.filtering_enabled {
            actions.push(Action::Search);
        }
        if !self.routes.is_empty() {
            actions.push(Action::Launch);
        } else {
            actions.push(Action::Confirm);
        }
        if self.back.is_some() || self.filter_state == FilterState::FilterApplied {
            actions.push(Action::Cancel);
        }
        actions.push(Action::Quit);

        if self.full_help {
            actions.extend([
                Action::PageUp,
                Action::PageDown,
                Action::GoToTop,
                Action::GoToEnd,
                Action::ToggleSpinner,
                Action::ToggleTitleBar,
                Action::ToggleStatusBar,
                Action::TogglePagination,
                Action::ToggleHelp,
            ]);
        }
        actions.push(Action::Help);

        keymap.help_line(&actions)
    }

    fn sections(&self, area: Rect, keymap: &Keymap) -> Sections {
        let inner = Block::default().padding(Padding::new(2, 2, 1, 1)).inner(area);

        let help_height = if self.options.show_help {
            Footer::height(&self.help_text(keymap), inner.width) + 1
        } else {
            0
        };

        let show_title = self.options.show_title;
        let constraints = [
            Constraint::Length(if show_title { 2 } else { 0 }),
            Constraint::Length(if self.options.show_status_bar { 2 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(if self.options.show_pagination { 1 } else { 0 }),
            Constraint::Length(help_height),
        ];
        let chunks = Layout::vertical(constraints).split(inner);

        Sections {
            title: show_title.then_some(chunks[0]),
            status: self.options.show_status_bar.then_some(chunks[1]),
            entries: chunks[2],
            pagination: self.options.show_pagination.then_some(chunks[3]),
            help: self.options.show_help.then(|| {
                // First row of the help section is spacing
                Rect {
                    y: chunks[4].y.saturating_add(1),
                    height: chunks[4].height.saturating_sub(1),
                    ..chunks[4]
                }
            }),
        }
    }

    fn title_line(&self, ctx: &RenderContext) -> Line<'_> {
        let t = ctx.theme;
        if self.filter_state == FilterState::Filtering {
            return Line::from(vec![
                Span::styled("Filter: ", t.text_style()),
                Span::styled(self.filter.text(), t.emphasis_style()),
                Span::styled("█", t.muted_style()),
            ]);
        }

        let mut spans = vec![Span::styled(format!(" {} ", self.title), t.title_bar_style())];
        if self.options.show_spinner {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
                t.status_style(),
            ));
        }
        if self.filter_state == FilterState::FilterApplied {
            spans.push(Span::styled(
                format!("  “{}”", self.filter.text()),
                t.muted_style(),
            ));
        }
        Line::from(spans)
    }

    fn status_line(&self, shown: usize, ctx: &RenderContext) -> Line<'_> {
        let t = ctx.theme;
        if let Some(status) = &self.status {
            return Line::from(Span::styled(status.as_str(), t.status_style()));
        }

        let total = self.entries.len();
        let noun = |n: usize| if n == 1 { "item" } else { "items" };
        let text = match self.filter_state {
            FilterState::Unfiltered if total == 0 => "No items.".to_string(),
            FilterState::Unfiltered => format!("{} {}", total, noun(total)),
            _ if shown == 0 => "Nothing matched.".to_string(),
            _ => format!("{} of {} {}", shown, total, noun(total)),
        };
        Line::from(Span::styled(text, t.muted_style()))
    }
}

impl Screen for ListScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn init(&mut self, _ctx: &ScreenContext) -> Effect {
        self.options = self.defaults;
        self.filtering_enabled = self.defaults.show_title;
        self.full_help = false;
        self.state = ListState::default();
        self.state.cursor_first(self.entries.len());
        self.filter_state = FilterState::Unfiltered;
        self.filter.clear();
        self.saved_cursor = None;
        self.status = None;
        self.spinner_frame = 0;

        if self.options.show_spinner {
            self.start_spinner()
        } else {
            // Drop any spinner tick left over from a previous visit
            self.spinner_tag = self.spinner_tag.wrapping_add(1);
            Effect::None
        }
    }

    fn resume(&mut self, _ctx: &ScreenContext) -> Effect {
        if self.options.show_spinner {
            self.start_spinner()
        } else {
            Effect::None
        }
    }

    fn update(&mut self, msg: &Msg, ctx: &ScreenContext) -> ScreenAction {
        match msg {
            Msg::Key(key) => self.handle_key(key, ctx),
            Msg::Tick(tick) => self.handle_tick(*tick),
            // Layout is derived from the viewport on demand
            Msg::Resize { .. } => ScreenAction::none(),
            Msg::Quit => ScreenAction::Stay(Effect::Quit),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = ctx.theme;
        let sections = self.sections(area, ctx.keymap);
        let visible = self.visible();

        if let Some(title_area) = sections.title {
            frame.render_widget(Paragraph::new(self.title_line(ctx)), title_area);
        }

        if let Some(status_area) = sections.status {
            frame.render_widget(
                Paragraph::new(self.status_line(visible.len(), ctx)),
                status_area,
            );
        }

        // Current page of entries
        let per_page = EntryList::capacity(sections.entries.height);
        let cursor = self.state.selected();
        let page = cursor.unwrap_or(0) / per_page;
        let start = page * per_page;
        let rows: Vec<EntryRow> = visible
            .iter()
            .skip(start)
            .take(per_page)
            .filter_map(|&i| self.entries.get(i))
            .map(|entry| EntryRow {
                title: &entry.title,
                description: &entry.description,
            })
            .collect();
        frame.render_widget(
            EntryList::new(rows, t).selected(cursor.map(|c| c - start)),
            sections.entries,
        );

        if let Some(pagination_area) = sections.pagination {
            let pages = visible.len().div_ceil(per_page);
            if pages > 1 {
                let dots: Vec<Span> = (0..pages)
                    .map(|p| {
                        if p == page {
                            Span::styled("●", t.text_style())
                        } else {
                            Span::styled("○", t.muted_style())
                        }
                    })
                    .collect();
                frame.render_widget(Paragraph::new(Line::from(dots)), pagination_area);
            }
        }

        if let Some(help_area) = sections.help {
            Footer::render(frame, help_area, &self.help_text(ctx.keymap), t);
        }
    }
}
