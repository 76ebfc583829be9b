//! Screen controllers for the application.
//!
//! Each screen implements the `Screen` trait: it owns its state, handles one
//! message at a time and renders itself. The router decides which screen
//! sees a message.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                       App                            │
//! │   terminal events ──► Msg        Effect ──► ticks    │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │                  Router                        │  │
//! │  │  match active {                                │  │
//! │  │    Menu    => menu.update(msg, ctx)            │  │
//! │  │    Timer   => timer.update(msg, ctx)           │  │
//! │  │    ...                                         │  │
//! │  │  }                                             │  │
//! │  └────────────────────────────────────────────────┘  │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │                Screen Trait                    │  │
//! │  │  - init / resume -> Effect                     │  │
//! │  │  - update(msg, ctx) -> ScreenAction            │  │
//! │  │  - render(frame, area, ctx)                    │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod about;
pub mod list;
pub mod screen_trait;
pub mod timer;

pub use about::AboutScreen;
pub use list::{FilterState, ListOptions, ListScreen, MenuEntry, Route};
pub use screen_trait::{Effect, RenderContext, Screen, ScreenAction, ScreenContext};
pub use timer::{TimerScreen, EXPIRED_MESSAGE};
