//! In-memory [`SectionStore`] with no backing medium.
//!
//! Used by unit tests throughout the workspace and by dry-run invocations
//! of the CLI tool. [`write()`](SectionStore::write) counts flushes but
//! otherwise does nothing, so tests can assert that persistence was (or
//! was not) requested.

use std::collections::BTreeMap;

use rigpreset_core::error::Result;
use rigpreset_core::store::SectionStore;

/// Volatile section store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
    write_count: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`write()`](SectionStore::write) has been called.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of sections currently in the store.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl SectionStore for MemoryStore {
    fn get(&self, section: &str, key: &str) -> String {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .cloned()
            .unwrap_or_default()
    }

    fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    fn add_section(&mut self, section: &str) {
        self.sections.entry(section.to_string()).or_default();
    }

    fn write(&mut self) -> Result<()> {
        self.write_count += 1;
        Ok(())
    }
}
