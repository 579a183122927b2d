//! The `RigBackend` trait -- interface for transceiver control backends.
//!
//! A backend implements CAT control for one rig model. The dispatcher in
//! `rigpreset-cat` programs against `dyn RigBackend` and never knows which
//! model's protocol is in use. Concrete hardware backends are supplied by
//! the surrounding system; `rigpreset-test-harness` provides a mock.
//!
//! All methods block to completion. There is no async suspension anywhere
//! in this workspace: invocation is serialized by the caller's
//! single-threaded event loop.

use crate::error::Result;
use crate::serial::SerialParams;
use crate::types::{OperatingMode, RigModel};

/// The response substring every backend uses to signal a failed command.
///
/// This is a convention of the ASCII command protocol, not a structured
/// error: callers scan responses for it and log, nothing more.
pub const ERROR_SENTINEL: &str = "ERROR";

/// Blocking control interface for one transceiver model.
///
/// Lifecycle, driven entirely by the dispatcher: configure the port,
/// initialize the rig, execute zero or more commands, close. A closed
/// backend may be reconfigured and reused on the next cycle.
pub trait RigBackend {
    /// The model this backend controls.
    fn model(&self) -> RigModel;

    /// The sentinel value returned in place of a response when a command
    /// fails or cannot be issued.
    fn error_sentinel(&self) -> &'static str {
        ERROR_SENTINEL
    }

    /// Configure (or reconfigure) the serial port.
    ///
    /// On error the backend stays allocated; the caller may retry with
    /// corrected parameters later.
    fn configure_port(&mut self, params: &SerialParams) -> Result<()>;

    /// Put the rig into a known state after a successful port
    /// configuration (e.g. enable CAT, read the rig ID).
    fn init_rig(&mut self);

    /// Execute one ASCII command and return the raw response.
    ///
    /// `opcode` is the first whitespace-delimited token of the command
    /// line; `args` is the remaining argument text (possibly empty).
    /// A failed command returns [`error_sentinel()`](RigBackend::error_sentinel)
    /// within the response rather than an `Err`.
    fn ascii_cmd(&mut self, opcode: &str, args: &str) -> String;

    /// Set both VFOs, both modes, and the split flag in one operation.
    ///
    /// Whether the five parameters are applied atomically is the backend's
    /// decision; the dispatcher guarantees only that this is a single call.
    /// Returns `"OK"` on success.
    fn configure_split(
        &mut self,
        freq_a_hz: u64,
        mode_a: OperatingMode,
        split: bool,
        freq_b_hz: u64,
        mode_b: OperatingMode,
    ) -> String;

    /// Release the serial port. Safe to call repeatedly.
    fn close(&mut self);
}

/// Factory for [`RigBackend`] instances.
///
/// Injected into the dispatcher at construction time so the backend set is
/// resolved once, not string-dispatched throughout the code, and so tests
/// can count and script instantiations.
pub trait BackendFactory {
    /// Create a backend for the given model.
    fn create(&self, model: RigModel) -> Box<dyn RigBackend>;
}
