//! # rigpreset -- Transceiver Presets and CAT Dispatch
//!
//! `rigpreset` lets station software save and replay named transceiver
//! configurations and dispatch short ASCII CAT commands to one of several
//! interchangeable control backends. Presets live in an INI-style config
//! file; the dispatcher binds whichever backend the stored rig selection
//! names and forwards commands over its serial port.
//!
//! ## Quick Start
//!
//! Recall a saved interface preset and send a command:
//!
//! ```no_run
//! use rigpreset::{actions, CatDispatcher, ConfigFile, DEFAULT_READ_TIMEOUT};
//! # fn factory() -> Box<dyn rigpreset::BackendFactory> { unimplemented!() }
//!
//! fn main() -> rigpreset::Result<()> {
//!     let mut store = ConfigFile::open("rigpreset.ini")?;
//!     actions::recall_cat_preset(&mut store, 1);
//!
//!     let mut dispatcher = CatDispatcher::new(factory());
//!     let response =
//!         actions::send_adhoc_command(&store, &mut dispatcher, "FREQA 14074000", DEFAULT_READ_TIMEOUT)?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                   | Purpose                                             |
//! |-------------------------|-----------------------------------------------------|
//! | `rigpreset-core`        | Traits ([`RigBackend`], [`SectionStore`]), types, errors |
//! | `rigpreset-store`       | [`ConfigFile`] (INI file) and [`MemoryStore`] stores |
//! | `rigpreset-presets`     | The preset record types and the active interface    |
//! | `rigpreset-cat`         | [`CatDispatcher`] and the composite [`actions`]     |
//! | `rigpreset-test-harness`| Mock backend/factory for testing without hardware   |
//! | **`rigpreset`**         | This facade crate -- re-exports everything          |
//!
//! ## Preset kinds
//!
//! - [`CatPreset`]: a saved serial interface configuration (rig, port,
//!   baud, framing). Recalling one makes it the active interface.
//! - [`ConfigPreset`]: a named sequence of up to ten CAT commands sent in
//!   order.
//! - [`MemoryPreset`]: an emulated memory channel carrying both VFOs,
//!   modes, split, CTCSS, and six auxiliary commands.
//!
//! All records are transient typed views over one section of a
//! [`SectionStore`]; `hydrate` and `persist` are explicit, and a record
//! whose id is 0 never touches storage.
//!
//! ## Backends
//!
//! Concrete hardware backends implement the [`RigBackend`] trait and are
//! supplied by the surrounding application via a [`BackendFactory`]. The
//! registry of dispatchable models is the closed [`RigModel`] enum.

pub use rigpreset_core::*;
pub use rigpreset_presets::{
    ActiveInterface, CatPreset, ConfigPreset, MemoryPreset, SetOutcome, ACTIVE_SECTION,
    NUM_CAT_PRESETS, NUM_CONFIG_COMMANDS, NUM_CONFIG_PRESETS, NUM_MEMORY_COMMANDS,
    NUM_MEMORY_PRESETS,
};
pub use rigpreset_store::{ConfigFile, MemoryStore};

pub use rigpreset_cat::{CatDispatcher, DEFAULT_READ_TIMEOUT};

/// Composite user actions: apply a preset, send a command, recall an
/// interface, following the bind / dispatch / release cycle.
pub mod actions {
    pub use rigpreset_cat::actions::*;
}
