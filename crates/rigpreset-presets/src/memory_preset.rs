//! Emulated memory channel preset.
//!
//! Stores everything a transceiver memory would: both VFO frequencies and
//! modes, the split flag, CTCSS configuration and tone, plus six free-text
//! auxiliary commands sent after the channel is applied.
//!
//! Mode and CTCSS assignments outside their enumerations are rejected with
//! the previous value retained. Garbage never corrupts a stored channel:
//! a bad write is dropped, a bad stored value hydrates to the default.

use std::str::FromStr;

use tracing::warn;

use rigpreset_core::helpers::{format_freq_mhz, to_float, to_int};
use rigpreset_core::store::SectionStore;
use rigpreset_core::types::{CtcssMode, OperatingMode};

use crate::{coerce_id, section_name, SetOutcome, NUM_MEMORY_COMMANDS};

const SECTION_TAG: &str = "MEMORY_PRESET";

/// An emulated transceiver memory channel.
#[derive(Debug, Clone)]
pub struct MemoryPreset {
    id: i32,
    preset_desc: String,
    vfoa_freq_mhz: f64,
    vfob_freq_mhz: f64,
    split: bool,
    mode_a: OperatingMode,
    mode_b: OperatingMode,
    ctcss_config: CtcssMode,
    ctcss_tone: i32,
    commands: [String; NUM_MEMORY_COMMANDS],
}

impl MemoryPreset {
    /// Create an empty record for the given slot.
    ///
    /// A non-positive id is coerced to 0, disabling persistence.
    pub fn new(id: i32) -> Self {
        MemoryPreset {
            id: coerce_id("MemoryPreset", id),
            preset_desc: String::new(),
            vfoa_freq_mhz: 0.0,
            vfob_freq_mhz: 0.0,
            split: false,
            mode_a: OperatingMode::Unknown,
            mode_b: OperatingMode::Unknown,
            ctcss_config: CtcssMode::Off,
            ctcss_tone: 0,
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

    /// Channel description.
    pub fn preset_desc(&self) -> &str {
        &self.preset_desc
    }

    /// Set the channel description.
    pub fn set_preset_desc(&mut self, val: &str) {
        self.preset_desc = val.to_string();
    }

    /// VFO-A frequency in MHz.
    pub fn vfoa_freq_mhz(&self) -> f64 {
        self.vfoa_freq_mhz
    }

    /// Set the VFO-A frequency in MHz.
    pub fn set_vfoa_freq_mhz(&mut self, val: f64) {
        self.vfoa_freq_mhz = val;
    }

    /// VFO-B frequency in MHz.
    pub fn vfob_freq_mhz(&self) -> f64 {
        self.vfob_freq_mhz
    }

    /// Set the VFO-B frequency in MHz.
    pub fn set_vfob_freq_mhz(&mut self, val: f64) {
        self.vfob_freq_mhz = val;
    }

    /// Whether split operation is enabled.
    pub fn split(&self) -> bool {
        self.split
    }

    /// Enable or disable split operation.
    pub fn set_split(&mut self, val: bool) {
        self.split = val;
    }

    /// VFO-A operating mode.
    pub fn mode_a(&self) -> OperatingMode {
        self.mode_a
    }

    /// Set the VFO-A operating mode from its string form.
    ///
    /// A value outside the mode enumeration is rejected and the previous
    /// mode retained.
    pub fn set_mode_a(&mut self, val: &str) -> SetOutcome {
        Self::assign_mode(&mut self.mode_a, val)
    }

    /// VFO-B operating mode.
    pub fn mode_b(&self) -> OperatingMode {
        self.mode_b
    }

    /// Set the VFO-B operating mode from its string form.
    ///
    /// A value outside the mode enumeration is rejected and the previous
    /// mode retained.
    pub fn set_mode_b(&mut self, val: &str) -> SetOutcome {
        Self::assign_mode(&mut self.mode_b, val)
    }

    /// CTCSS configuration.
    pub fn ctcss_config(&self) -> CtcssMode {
        self.ctcss_config
    }

    /// Set the CTCSS configuration from its string form (`OFF`/`ENC`/`DEC`).
    ///
    /// A value outside the set is rejected and the previous value retained.
    pub fn set_ctcss_config(&mut self, val: &str) -> SetOutcome {
        match CtcssMode::from_str(val) {
            Ok(mode) => {
                self.ctcss_config = mode;
                SetOutcome::Accepted
            }
            Err(e) => {
                warn!(value = val, error = %e, "rejected CTCSS configuration");
                SetOutcome::Rejected
            }
        }
    }

    /// CTCSS tone in tenths of Hz (e.g. 1318 for 131.8 Hz).
    pub fn ctcss_tone(&self) -> i32 {
        self.ctcss_tone
    }

    /// Set the CTCSS tone. No range validation is applied.
    pub fn set_ctcss_tone(&mut self, val: i32) {
        self.ctcss_tone = val;
    }

    /// The auxiliary command at `idx`, or the empty string when `idx` is
    /// out of range.
    pub fn command(&self, idx: usize) -> &str {
        self.commands.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Set the auxiliary command at `idx`, trimming surrounding
    /// whitespace. An out-of-range index is rejected.
    pub fn set_command(&mut self, idx: usize, cmd: &str) -> SetOutcome {
        match self.commands.get_mut(idx) {
            Some(slot) => {
                *slot = cmd.trim().to_string();
                SetOutcome::Accepted
            }
            None => SetOutcome::Rejected,
        }
    }

    fn assign_mode(field: &mut OperatingMode, val: &str) -> SetOutcome {
        match OperatingMode::from_str(val) {
            Ok(mode) => {
                *field = mode;
                SetOutcome::Accepted
            }
            Err(e) => {
                warn!(value = val, error = %e, "rejected operating mode");
                SetOutcome::Rejected
            }
        }
    }

    fn parse_mode(section: &str, key: &str, raw: &str) -> OperatingMode {
        raw.parse().unwrap_or_else(|_| {
            if !raw.is_empty() {
                warn!(section, key, value = raw, "invalid stored mode, using UNKNOWN");
            }
            OperatingMode::Unknown
        })
    }

    fn parse_ctcss(section: &str, raw: &str) -> CtcssMode {
        raw.parse().unwrap_or_else(|_| {
            if !raw.is_empty() {
                warn!(section, value = raw, "invalid stored CTCSS configuration, using OFF");
            }
            CtcssMode::Off
        })
    }

    /// Load every field from the store, coercing stored garbage to the
    /// field defaults. No-op when the record has no slot.
    pub fn hydrate(&mut self, store: &dyn SectionStore) {
        if self.id <= 0 {
            return;
        }
        let section = self.section();
        self.preset_desc = store.get(&section, "PRESET_DESC");
        self.vfoa_freq_mhz = to_float(&store.get(&section, "VFOA_FREQ_MHZ"));
        self.vfob_freq_mhz = to_float(&store.get(&section, "VFOB_FREQ_MHZ"));
        self.split = store.get(&section, "SPLIT") == "ON";
        self.mode_a = Self::parse_mode(&section, "MODEA", &store.get(&section, "MODEA"));
        self.mode_b = Self::parse_mode(&section, "MODEB", &store.get(&section, "MODEB"));
        self.ctcss_config = Self::parse_ctcss(&section, &store.get(&section, "CTCSS_CONFIG"));
        self.ctcss_tone = to_int(&store.get(&section, "CTCSS_TONE"));
        for (idx, slot) in self.commands.iter_mut().enumerate() {
            *slot = store.get(&section, &format!("COMMAND{}", idx + 1));
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
        store.set(&section, "PRESET_DESC", &self.preset_desc);
        store.set(&section, "VFOA_FREQ_MHZ", &format_freq_mhz(self.vfoa_freq_mhz));
        store.set(&section, "VFOB_FREQ_MHZ", &format_freq_mhz(self.vfob_freq_mhz));
        store.set(&section, "SPLIT", if self.split { "ON" } else { "OFF" });
        store.set(&section, "MODEA", &self.mode_a.to_string());
        store.set(&section, "MODEB", &self.mode_b.to_string());
        store.set(&section, "CTCSS_CONFIG", &self.ctcss_config.to_string());
        store.set(&section, "CTCSS_TONE", &self.ctcss_tone.to_string());
        for (idx, cmd) in self.commands.iter().enumerate() {
            store.set(&section, &format!("COMMAND{}", idx + 1), cmd);
        }
        if let Err(e) = store.write() {
            tracing::warn!(section, error = %e, "failed to flush preset store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigpreset_store::MemoryStore;

    #[test]
    fn section_naming() {
        assert_eq!(MemoryPreset::new(7).section(), "MEMORY_PRESET007");
        assert_eq!(MemoryPreset::new(32).section(), "MEMORY_PRESET032");
    }

    #[test]
    fn defaults() {
        let p = MemoryPreset::new(1);
        assert_eq!(p.vfoa_freq_mhz(), 0.0);
        assert!(!p.split());
        assert_eq!(p.mode_a(), OperatingMode::Unknown);
        assert_eq!(p.ctcss_config(), CtcssMode::Off);
        assert_eq!(p.ctcss_tone(), 0);
    }

    #[test]
    fn persist_with_zero_id_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let mut p = MemoryPreset::new(0);
        p.set_preset_desc("never saved");
        p.persist(&mut store);
        assert_eq!(store.section_count(), 0);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn persist_then_hydrate_round_trips() {
        let mut store = MemoryStore::new();
        let mut p = MemoryPreset::new(5);
        p.set_preset_desc("Sat A");
        p.set_vfoa_freq_mhz(146.640);
        p.set_vfob_freq_mhz(146.040);
        p.set_split(true);
        assert!(p.set_mode_a("FM").is_accepted());
        assert!(p.set_mode_b("USB").is_accepted());
        assert!(p.set_ctcss_config("ENC").is_accepted());
        p.set_ctcss_tone(1318);
        p.set_command(0, "MONITOR ON 20");
        p.persist(&mut store);

        let mut q = MemoryPreset::new(5);
        q.hydrate(&store);
        assert_eq!(q.preset_desc(), "Sat A");
        assert_eq!(q.vfoa_freq_mhz(), 146.640);
        assert_eq!(q.vfob_freq_mhz(), 146.040);
        assert!(q.split());
        assert_eq!(q.mode_a(), OperatingMode::FM);
        assert_eq!(q.mode_b(), OperatingMode::USB);
        assert_eq!(q.ctcss_config(), CtcssMode::Enc);
        assert_eq!(q.ctcss_tone(), 1318);
        assert_eq!(q.command(0), "MONITOR ON 20");
        assert_eq!(q.command(1), "");
    }

    #[test]
    fn invalid_mode_retains_previous_value() {
        let mut p = MemoryPreset::new(1);
        assert!(p.set_mode_a("FM").is_accepted());
        assert!(p.set_mode_a("NOT-A-MODE").is_rejected());
        assert_eq!(p.mode_a(), OperatingMode::FM);
    }

    #[test]
    fn mode_setter_accepts_lowercase() {
        let mut p = MemoryPreset::new(1);
        assert!(p.set_mode_b("usb").is_accepted());
        assert_eq!(p.mode_b(), OperatingMode::USB);
    }

    #[test]
    fn invalid_ctcss_config_retains_previous_value() {
        let mut p = MemoryPreset::new(1);
        assert!(p.set_ctcss_config("DEC").is_accepted());
        assert!(p.set_ctcss_config("BOTH").is_rejected());
        assert!(p.set_ctcss_config("enc").is_rejected());
        assert_eq!(p.ctcss_config(), CtcssMode::Dec);
    }

    #[test]
    fn command_index_policy() {
        let mut p = MemoryPreset::new(1);
        assert!(p.set_command(NUM_MEMORY_COMMANDS - 1, "TONE ENC").is_accepted());
        assert!(p.set_command(NUM_MEMORY_COMMANDS, "TOO FAR").is_rejected());
        assert_eq!(p.command(NUM_MEMORY_COMMANDS), "");
        assert_eq!(p.command(NUM_MEMORY_COMMANDS - 1), "TONE ENC");
    }

    #[test]
    fn commands_trimmed_on_write() {
        let mut p = MemoryPreset::new(1);
        p.set_command(2, "  POWER 50  ");
        assert_eq!(p.command(2), "POWER 50");
    }

    #[test]
    fn hydrate_coerces_garbage_numerics_to_zero() {
        let mut store = MemoryStore::new();
        use rigpreset_core::SectionStore;
        store.set("MEMORY_PRESET009", "VFOA_FREQ_MHZ", "not a number");
        store.set("MEMORY_PRESET009", "CTCSS_TONE", "131.8");

        let mut p = MemoryPreset::new(9);
        p.hydrate(&store);
        assert_eq!(p.vfoa_freq_mhz(), 0.0);
        assert_eq!(p.ctcss_tone(), 0);
    }

    #[test]
    fn hydrate_coerces_garbage_mode_to_unknown() {
        let mut store = MemoryStore::new();
        use rigpreset_core::SectionStore;
        store.set("MEMORY_PRESET009", "MODEA", "C4FM");

        let mut p = MemoryPreset::new(9);
        p.hydrate(&store);
        assert_eq!(p.mode_a(), OperatingMode::Unknown);
    }

    #[test]
    fn ctcss_hydration_coerces_to_off() {
        // An empty (never-persisted) value is the normal case, not garbage.
        assert_eq!(MemoryPreset::parse_ctcss("MEMORY_PRESET001", ""), CtcssMode::Off);
        assert_eq!(MemoryPreset::parse_ctcss("MEMORY_PRESET001", "BOTH"), CtcssMode::Off);

        let store = MemoryStore::new();
        let mut p = MemoryPreset::new(11);
        p.hydrate(&store);
        assert_eq!(p.ctcss_config(), CtcssMode::Off);
    }

    #[test]
    fn split_stored_as_on_off() {
        let mut store = MemoryStore::new();
        let mut p = MemoryPreset::new(3);
        p.set_split(true);
        p.persist(&mut store);
        use rigpreset_core::SectionStore;
        assert_eq!(store.get("MEMORY_PRESET003", "SPLIT"), "ON");

        p.set_split(false);
        p.persist(&mut store);
        assert_eq!(store.get("MEMORY_PRESET003", "SPLIT"), "OFF");
    }

    #[test]
    fn frequencies_stored_with_six_decimals() {
        let mut store = MemoryStore::new();
        let mut p = MemoryPreset::new(4);
        p.set_vfoa_freq_mhz(146.52);
        p.persist(&mut store);
        use rigpreset_core::SectionStore;
        assert_eq!(store.get("MEMORY_PRESET004", "VFOA_FREQ_MHZ"), "146.520000");
    }
}
