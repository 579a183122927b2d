//! rigpreset-core: Core traits, types, and error definitions for rigpreset.
//!
//! This crate defines the abstractions the rest of the workspace is built
//! on. Preset records, the command dispatcher, and test harnesses all
//! depend on these types without pulling in a concrete store or backend.
//!
//! # Key types
//!
//! - [`SectionStore`] -- section-keyed string storage contract
//! - [`RigBackend`] / [`BackendFactory`] -- transceiver control backends
//! - [`RigModel`] -- the closed registry of supported rigs
//! - [`SerialParams`] -- typed serial port configuration
//! - [`Error`] / [`Result`] -- error handling

pub mod backend;
pub mod error;
pub mod helpers;
pub mod serial;
pub mod store;
pub mod types;

// Re-export key types at crate root for ergonomic `use rigpreset_core::*`.
pub use backend::{BackendFactory, RigBackend, ERROR_SENTINEL};
pub use error::{Error, Result};
pub use helpers::{format_freq_mhz, to_float, to_int};
pub use serial::{DataBits, Parity, SerialParams, StopBits};
pub use store::SectionStore;
pub use types::{CtcssMode, OperatingMode, ParseModeError, ParseRigModelError, RigModel};
