//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying dashboard data
//! as JSON or as borderless tables.

mod json;
mod text;

// Re-export public API
pub use json::{note_json, print_json};
pub use text::{print_category_list, print_note, print_tab_list};
