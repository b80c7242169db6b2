// UI Components
// This module contains all reusable UI components

pub mod header;
pub mod notes_table;
pub mod toast;

pub use header::Header;
pub use notes_table::NotesTable;
