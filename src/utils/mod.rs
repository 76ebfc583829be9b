pub mod duration;
pub mod filter;
pub mod list_navigation;

pub use duration::format_countdown;
pub use filter::FilterInput;
pub use list_navigation::ListStateExt;
