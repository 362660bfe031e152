//! Terminal output formatting
//!
//! Display utilities for the plain-terminal commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_history, print_keyboard, print_share, print_stats};
