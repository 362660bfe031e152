//! Finished games and resumable snapshots

mod entry;
mod snapshot;
mod store;

pub use entry::HistoryEntry;
pub use snapshot::{
    GameSnapshot, Rejection, clear_snapshot, load_snapshot, parse_snapshot, resumable_modes,
    save_snapshot,
};
pub use store::HistoryStore;
