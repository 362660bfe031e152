//! Command implementations

pub mod history;
pub mod simple;
pub mod stats;

pub use history::{ModeHistory, collect_history};
pub use simple::run_simple;
pub use stats::{ModeStats, collect_stats};

use crate::modes::{GameMode, ModeCatalog};

/// The named mode, or every mode when `mode_id` is `None`
///
/// # Errors
///
/// Returns an error naming the valid ids if `mode_id` is unknown.
pub fn select_modes(mode_id: Option<&str>) -> Result<Vec<&'static GameMode>, String> {
    match mode_id {
        None => Ok(ModeCatalog::all().iter().collect()),
        Some(id) => ModeCatalog::get(id).map(|mode| vec![mode]).ok_or_else(|| {
            let known: Vec<&str> = ModeCatalog::all().iter().map(|m| m.id).collect();
            format!("Unknown mode '{id}' (expected one of: {})", known.join(", "))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_or_one() {
        assert_eq!(select_modes(None).unwrap().len(), 4);
        assert_eq!(select_modes(Some("epic")).unwrap()[0].word_length, 6);

        let err = select_modes(Some("hard")).unwrap_err();
        assert!(err.contains("mini, junior, classic, epic"));
    }
}
