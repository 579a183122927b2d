//! Saved CAT interface preset: one rig selection plus its serial settings.
//!
//! All fields are held as strings exactly as stored; this record does not
//! interpret them. Translation into typed parameters happens in the
//! dispatcher when the preset is actually used (after being recalled into
//! the [`ActiveInterface`](crate::ActiveInterface) singleton).

use rigpreset_core::store::SectionStore;

use crate::{coerce_id, section_name};

const SECTION_TAG: &str = "CAT_PRESET";

/// A saved transceiver CAT interface configuration.
#[derive(Debug, Clone, Default)]
pub struct CatPreset {
    id: i32,
    preset_name: String,
    rig: String,
    port: String,
    baud: String,
    data: String,
    parity: String,
    stop: String,
}

impl CatPreset {
    /// Create an empty record for the given slot.
    ///
    /// A non-positive id is coerced to 0, which makes [`hydrate`] and
    /// [`persist`] no-ops for the record's lifetime.
    ///
    /// [`hydrate`]: CatPreset::hydrate
    /// [`persist`]: CatPreset::persist
    pub fn new(id: i32) -> Self {
        CatPreset {
            id: coerce_id("CatPreset", id),
            ..Default::default()
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

    /// Preset name shown on the recall button.
    pub fn preset_name(&self) -> &str {
        &self.preset_name
    }

    /// Set the preset name.
    pub fn set_preset_name(&mut self, val: &str) {
        self.preset_name = val.to_string();
    }

    /// Rig name, matched case-sensitively against the model registry at
    /// dispatch time.
    pub fn rig(&self) -> &str {
        &self.rig
    }

    /// Set the rig name.
    pub fn set_rig(&mut self, val: &str) {
        self.rig = val.to_string();
    }

    /// Serial port path.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Set the serial port path.
    pub fn set_port(&mut self, val: &str) {
        self.port = val.to_string();
    }

    /// Baud rate, as stored.
    pub fn baud(&self) -> &str {
        &self.baud
    }

    /// Set the baud rate string.
    pub fn set_baud(&mut self, val: &str) {
        self.baud = val.to_string();
    }

    /// Data bit count, as stored.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Set the data bit count string.
    pub fn set_data(&mut self, val: &str) {
        self.data = val.to_string();
    }

    /// Parity, as stored.
    pub fn parity(&self) -> &str {
        &self.parity
    }

    /// Set the parity string.
    pub fn set_parity(&mut self, val: &str) {
        self.parity = val.to_string();
    }

    /// Stop bit count, as stored.
    pub fn stop(&self) -> &str {
        &self.stop
    }

    /// Set the stop bit count string.
    pub fn set_stop(&mut self, val: &str) {
        self.stop = val.to_string();
    }

    /// Load every field from the store, using the empty string for keys
    /// not yet present. No-op when the record has no slot. Idempotent;
    /// later calls overwrite unsaved in-memory edits.
    pub fn hydrate(&mut self, store: &dyn SectionStore) {
        if self.id <= 0 {
            return;
        }
        let section = self.section();
        self.preset_name = store.get(&section, "PRESET_NAME");
        self.rig = store.get(&section, "RIG");
        self.port = store.get(&section, "PORT");
        self.baud = store.get(&section, "BAUD");
        self.data = store.get(&section, "DATA");
        self.parity = store.get(&section, "PARITY");
        self.stop = store.get(&section, "STOP");
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
        store.set(&section, "RIG", &self.rig);
        store.set(&section, "PORT", &self.port);
        store.set(&section, "BAUD", &self.baud);
        store.set(&section, "DATA", &self.data);
        store.set(&section, "PARITY", &self.parity);
        store.set(&section, "STOP", &self.stop);
        if let Err(e) = store.write() {
            tracing::warn!(section, error = %e, "failed to flush preset store");
        }
    }
}
