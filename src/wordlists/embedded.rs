//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Look up an embedded list by name (file stem, e.g. `allowed-answers-3`)
#[must_use]
pub fn embedded_list(name: &str) -> Option<&'static [&'static str]> {
    EMBEDDED_LISTS
        .iter()
        .find(|(list_name, _)| *list_name == name)
        .map(|(_, words)| *words)
}
