//! Composite user actions.
//!
//! Each function here is one button press worth of work: bind the
//! configured backend, dispatch the commands the action calls for, then
//! release the port. The release runs even when the bind failed, so a
//! half-configured backend never stays holding the port.
//!
//! Command responses are advisory. A response carrying the ERROR sentinel
//! or a non-"OK" split result is logged and the action continues; only
//! bind failures surface as errors.

use std::time::Duration;

use tracing::warn;

use rigpreset_core::error::Result;
use rigpreset_core::store::SectionStore;
use rigpreset_core::types::CtcssMode;
use rigpreset_presets::{
    ActiveInterface, CatPreset, ConfigPreset, MemoryPreset, NUM_CONFIG_COMMANDS,
    NUM_MEMORY_COMMANDS,
};

use crate::dispatcher::CatDispatcher;

/// Read timeout for PTT keying, kept short so a stuck rig cannot hold
/// the key line while the caller waits.
pub const PTT_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Send a config preset's stored command sequence to the rig.
///
/// Hydrates the preset, binds the backend, sends each non-empty command
/// in slot order, and releases the port.
pub fn apply_config_preset(
    store: &dyn SectionStore,
    dispatcher: &mut CatDispatcher,
    id: i32,
    read_timeout: Duration,
) -> Result<()> {
    let mut preset = ConfigPreset::new(id);
    preset.hydrate(store);

    let bound = dispatcher.initialize(store, read_timeout);
    if bound.is_ok() {
        for idx in 0..NUM_CONFIG_COMMANDS {
            let cmd = preset.command(idx);
            if !cmd.is_empty() {
                dispatcher.send_command(cmd);
            }
        }
    }
    dispatcher.release();
    bound
}

/// Put the rig on a stored memory channel.
///
/// One split setup carrying both VFOs, the split flag, and both modes;
/// then the CTCSS command; then each non-empty auxiliary command in slot
/// order. The tone number is appended to the CTCSS command unless the
/// configuration is OFF.
pub fn apply_memory_preset(
    store: &dyn SectionStore,
    dispatcher: &mut CatDispatcher,
    id: i32,
    read_timeout: Duration,
) -> Result<()> {
    let mut preset = MemoryPreset::new(id);
    preset.hydrate(store);

    let bound = dispatcher.initialize(store, read_timeout);
    if bound.is_ok() {
        let response = dispatcher.setup_split(
            mhz_to_hz(preset.vfoa_freq_mhz()),
            preset.mode_a(),
            preset.split(),
            mhz_to_hz(preset.vfob_freq_mhz()),
            preset.mode_b(),
        );
        if response != "OK" {
            warn!(preset = id, response = %response, "split setup not confirmed");
        }

        dispatcher.send_command(&ctcss_command(preset.ctcss_config(), preset.ctcss_tone()));

        for idx in 0..NUM_MEMORY_COMMANDS {
            let cmd = preset.command(idx);
            if !cmd.is_empty() {
                dispatcher.send_command(cmd);
            }
        }
    }
    dispatcher.release();
    bound
}

/// One-shot command entry: bind, send the line, release.
pub fn send_adhoc_command(
    store: &dyn SectionStore,
    dispatcher: &mut CatDispatcher,
    line: &str,
    read_timeout: Duration,
) -> Result<String> {
    let response = match dispatcher.initialize(store, read_timeout) {
        Ok(()) => Ok(dispatcher.send_command(line)),
        Err(e) => Err(e),
    };
    dispatcher.release();
    response
}

/// Tune VFO-A to the given frequency.
pub fn set_vfoa_frequency(
    store: &dyn SectionStore,
    dispatcher: &mut CatDispatcher,
    freq_mhz: f64,
    read_timeout: Duration,
) -> Result<()> {
    let bound = dispatcher.initialize(store, read_timeout);
    if bound.is_ok() {
        dispatcher.send_command(&format!("FREQA {}", mhz_to_hz(freq_mhz)));
    }
    dispatcher.release();
    bound
}

/// Key or unkey the transmitter.
pub fn set_ptt(store: &dyn SectionStore, dispatcher: &mut CatDispatcher, on: bool) -> Result<()> {
    let bound = dispatcher.initialize(store, PTT_READ_TIMEOUT);
    if bound.is_ok() {
        dispatcher.send_command(if on { "PTT ON" } else { "PTT OFF" });
    }
    dispatcher.release();
    bound
}

/// Make a saved interface preset the active interface.
///
/// Copies the preset's serial fields into the `CAT` section, records the
/// preset number, and flushes. No backend is touched; the change takes
/// effect on the next bind.
pub fn recall_cat_preset(store: &mut dyn SectionStore, id: i32) {
    let mut preset = CatPreset::new(id);
    preset.hydrate(&*store);

    let mut active = ActiveInterface::new();
    active.recall(&preset);
    active.persist(store);
}

fn mhz_to_hz(freq_mhz: f64) -> u64 {
    (freq_mhz * 1_000_000.0).round() as u64
}

fn ctcss_command(config: CtcssMode, tone: i32) -> String {
    match config {
        CtcssMode::Off => format!("TONE {config}"),
        _ => format!("TONE {config} {tone}"),
    }
}
