//! rigpreset-cat: Backend selection and command dispatch for rigpreset.
//!
//! [`CatDispatcher`] resolves the stored rig selection against the model
//! registry, configures the backend's serial port from the stored
//! settings, and forwards ASCII command lines. The [`actions`] module
//! wraps the dispatcher in the complete user-facing flows: apply a
//! config or memory preset, send a one-shot command, tune VFO-A, key
//! the transmitter, recall an interface preset.

pub mod actions;
pub mod dispatcher;

pub use dispatcher::{CatDispatcher, DEFAULT_READ_TIMEOUT};
