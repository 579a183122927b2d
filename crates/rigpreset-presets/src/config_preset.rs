//! Configuration preset: a named, ordered sequence of CAT commands.
//!
//! Applying the preset sends each non-empty command in order (see
//! `rigpreset-cat`). Commands are addressed by 0-based index; an index
//! outside `[0, NUM_CONFIG_COMMANDS)` is rejected on write and reads as
//! the empty string, so callers can iterate a fixed range without
//! bounds bookkeeping.

use rigpreset_core::store::SectionStore;

use crate::{coerce_id, section_name, SetOutcome, NUM_CONFIG_COMMANDS};

const SECTION_TAG: &str = "CONFIG_PRESET";

/// A saved transceiver configuration: up to
/// [`NUM_CONFIG_COMMANDS`] CAT command lines sent in order.
#[derive(Debug, Clone)]
pub struct ConfigPreset {
    id: i32,
    preset_name: String,
    commands: [String; NUM_CONFIG_COMMANDS],
}

impl ConfigPreset {
    /// Create an empty record for the given slot.
    ///
    /// A non-positive id is coerced to 0, disabling persistence.
    pub fn new(id: i32) -> Self {
        ConfigPreset {
            id: coerce_id("ConfigPreset", id),
            preset_name: String::new(),
            commands: std::array::from_fn(|_| String::new()),
        }
    }

    /// The record's slot id (0 if not backed by storage).
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The store section this record maps to.
    pub fn section(&self) -> String {
        section_name(SECTION_TAG, self.id)
    }

    /// Preset name shown on the apply button.
    pub fn preset_name(&self) -> &str {
        &self.preset_name
    }

    /// Set the preset name.
    pub fn set_preset_name(&mut self, val: &str) {
        self.preset_name = val.to_string();
    }

    /// The command at `idx`, or the empty string when `idx` is out of
    /// range.
    pub fn command(&self, idx: usize) -> &str {
        self.commands.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Set the command at `idx`, trimming surrounding whitespace.
    ///
    /// An out-of-range index is rejected; nothing is stored.
    pub fn set_command(&mut self, idx: usize, cmd: &str) -> SetOutcome {
        match self.commands.get_mut(idx) {
            Some(slot) => {
                *slot = cmd.trim().to_string();
                SetOutcome::Accepted
            }
            None => SetOutcome::Rejected,
        }
    }

    /// Load every field from the store. No-op when the record has no slot.
    pub fn hydrate(&mut self, store: &dyn SectionStore) {
        if self.id <= 0 {
            return;
        }
        let section = self.section();
        self.preset_name = store.get(&section, "PRESET_NAME");
        for (idx, slot) in self.commands.iter_mut().enumerate() {
            *slot = store.get(&section, &format!("CMD{:03}", idx + 1));
        }
    }

    /// Write every field into the store and flush. No-op when the record
    /// has no slot. A flush failure is logged, never propagated.
    pub fn persist(&self, store: &mut dyn SectionStore) {
        if self.id <= 0 {
            return;
        }
        let section = self.section();
        store.add_section(&section);
        store.set(&section, "PRESET_NAME", &self.preset_name);
        for (idx, cmd) in self.commands.iter().enumerate() {
            store.set(&section, &format!("CMD{:03}", idx + 1), cmd);
        }
        if let Err(e) = store.write() {
            tracing::warn!(section, error = %e, "failed to flush preset store");
        }
    }
}
