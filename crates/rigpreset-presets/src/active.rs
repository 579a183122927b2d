//! The active interface singleton: the `CAT` section.
//!
//! This is what the dispatcher actually reads on every initialize. It is
//! not slot-addressed: there is exactly one, it always exists once
//! anything has been recalled into it, and persistence is unconditional.
//!
//! Recalling a saved [`CatPreset`] copies its serial fields here and
//! records which preset number was recalled, so the UI can highlight the
//! active button after a restart.

use rigpreset_core::store::SectionStore;

use crate::CatPreset;

/// The section the dispatcher reads its configuration from.
pub const ACTIVE_SECTION: &str = "CAT";

/// Typed view over the active interface singleton.
#[derive(Debug, Clone, Default)]
pub struct ActiveInterface {
    preset: String,
    rig: String,
    port: String,
    baud: String,
    data: String,
    parity: String,
    stop: String,
}

impl ActiveInterface {
    /// Create an empty view. Call [`hydrate`](ActiveInterface::hydrate)
    /// to load the stored state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recalled preset number, as stored ("" if nothing was ever
    /// recalled).
    pub fn preset(&self) -> &str {
        &self.preset
    }

    /// Rig name the dispatcher will resolve.
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

    /// Copy a saved interface preset's fields into this singleton and
    /// record its preset number.
    pub fn recall(&mut self, preset: &CatPreset) {
        self.preset = preset.id().to_string();
        self.rig = preset.rig().to_string();
        self.port = preset.port().to_string();
        self.baud = preset.baud().to_string();
        self.data = preset.data().to_string();
        self.parity = preset.parity().to_string();
        self.stop = preset.stop().to_string();
    }

    /// Load every field from the `CAT` section, empty string defaults.
    pub fn hydrate(&mut self, store: &dyn SectionStore) {
        self.preset = store.get(ACTIVE_SECTION, "PRESET");
        self.rig = store.get(ACTIVE_SECTION, "RIG");
        self.port = store.get(ACTIVE_SECTION, "PORT");
        self.baud = store.get(ACTIVE_SECTION, "BAUD");
        self.data = store.get(ACTIVE_SECTION, "DATA");
        self.parity = store.get(ACTIVE_SECTION, "PARITY");
        self.stop = store.get(ACTIVE_SECTION, "STOP");
    }

    /// Write every field into the `CAT` section and flush. A flush
    /// failure is logged, never propagated.
    pub fn persist(&self, store: &mut dyn SectionStore) {
        store.add_section(ACTIVE_SECTION);
        store.set(ACTIVE_SECTION, "PRESET", &self.preset);
        store.set(ACTIVE_SECTION, "RIG", &self.rig);
        store.set(ACTIVE_SECTION, "PORT", &self.port);
        store.set(ACTIVE_SECTION, "BAUD", &self.baud);
        store.set(ACTIVE_SECTION, "DATA", &self.data);
        store.set(ACTIVE_SECTION, "PARITY", &self.parity);
        store.set(ACTIVE_SECTION, "STOP", &self.stop);
        if let Err(e) = store.write() {
            tracing::warn!(section = ACTIVE_SECTION, error = %e, "failed to flush preset store");
        }
    }
}
