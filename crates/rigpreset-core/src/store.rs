//! The `SectionStore` trait -- section-keyed string storage.
//!
//! Preset records read and write their fields through this trait rather
//! than directly against a file, enabling both the durable INI-format
//! store and an in-memory store for testing (`rigpreset-store` provides
//! both).
//!
//! The contract is deliberately forgiving: reads never fail, missing data
//! is the empty string, and section creation is idempotent. All values are
//! strings; typing and validation live in the preset records.

use crate::error::Result;

/// Section-keyed string storage.
///
/// Implementations are free to choose the backing medium. The only durable
/// operation is [`write()`](SectionStore::write); `set` mutates the
/// in-memory view. Two records persisted against the same section are
/// last-write-wins with no merge.
pub trait SectionStore {
    /// Get the value for `key` in `section`.
    ///
    /// Returns the empty string if the section or key does not exist.
    /// Never fails.
    fn get(&self, section: &str, key: &str) -> String;

    /// Set the value for `key` in `section`, creating the section if it
    /// does not exist.
    fn set(&mut self, section: &str, key: &str, value: &str);

    /// Check whether a section exists.
    fn has_section(&self, section: &str) -> bool;

    /// Create an empty section. A no-op if the section already exists.
    fn add_section(&mut self, section: &str);

    /// Flush all pending changes to the backing medium.
    fn write(&mut self) -> Result<()>;
}
