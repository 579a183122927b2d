//! rigpreset-presets: Typed preset records over the section store.
//!
//! Each record type is an in-memory view of exactly one store section,
//! with coercing setters and explicit [`hydrate`]/[`persist`] operations.
//! Records are transient: construct, hydrate, mutate, persist, discard.
//! The store is the only durable state, and nothing here auto-saves.
//!
//! [`hydrate`]: CatPreset::hydrate
//! [`persist`]: CatPreset::persist
//!
//! # Record types
//!
//! | Type | Slots | Section |
//! |---|---|---|
//! | [`CatPreset`] | 4 | `CAT_PRESET{id:03}` |
//! | [`ConfigPreset`] | 6 | `CONFIG_PRESET{id:03}` |
//! | [`MemoryPreset`] | 32 | `MEMORY_PRESET{id:03}` |
//! | [`ActiveInterface`] | singleton | `CAT` |
//!
//! # Validation policy
//!
//! No setter ever fails observably. Numeric garbage coerces to zero,
//! invalid enum values are rejected with the previous value retained, and
//! out-of-range command indexes are no-ops. Setters that can reject return
//! a [`SetOutcome`] so callers (and tests) can see the rejection without
//! parsing log output.

pub mod active;
pub mod cat_preset;
pub mod config_preset;
pub mod memory_preset;

pub use active::{ActiveInterface, ACTIVE_SECTION};
pub use cat_preset::CatPreset;
pub use config_preset::ConfigPreset;
pub use memory_preset::MemoryPreset;

use tracing::warn;

/// Number of saved CAT interface presets.
pub const NUM_CAT_PRESETS: usize = 4;

/// Number of saved configuration presets.
pub const NUM_CONFIG_PRESETS: usize = 6;

/// Number of commands in one configuration preset.
pub const NUM_CONFIG_COMMANDS: usize = 10;

/// Number of emulated memory presets.
pub const NUM_MEMORY_PRESETS: usize = 32;

/// Number of auxiliary text commands in one memory preset.
pub const NUM_MEMORY_COMMANDS: usize = 6;

/// Result of a setter that validates its input.
///
/// Rejection is not an error: the record keeps its previous value and the
/// surrounding operation continues. This exists so tests can assert on
/// rejection directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was stored.
    Accepted,
    /// The value was invalid; the previous value was retained.
    Rejected,
}

impl SetOutcome {
    /// Whether the value was stored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SetOutcome::Accepted)
    }

    /// Whether the value was dropped.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SetOutcome::Rejected)
    }
}

/// Build the store section name for a slot-addressed record:
/// the type tag plus the 3-digit zero-padded id.
///
/// ```
/// assert_eq!(rigpreset_presets::section_name("MEMORY_PRESET", 7), "MEMORY_PRESET007");
/// ```
pub fn section_name(tag: &str, id: i32) -> String {
    format!("{tag}{id:03}")
}

/// Coerce a record id: anything non-positive becomes 0, which disables
/// persistence for the record's lifetime.
pub(crate) fn coerce_id(record: &str, id: i32) -> i32 {
    if id > 0 {
        id
    } else {
        if id < 0 {
            warn!(record, id, "invalid preset id, coerced to 0");
        }
        0
    }
}
