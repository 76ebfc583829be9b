// Shared rendering pieces used by several screens

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;
