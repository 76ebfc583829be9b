// Reusable UI widgets

pub mod entry_list;

pub use entry_list::{EntryList, EntryRow, ENTRY_HEIGHT};
