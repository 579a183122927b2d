//! The command dispatcher: binds one backend, forwards commands.
//!
//! `CatDispatcher` owns at most one [`RigBackend`] at a time, selected by
//! the rig name stored in the active interface section. The usage pattern
//! is fixed: every user-triggered action performs
//! [`initialize()`](CatDispatcher::initialize), one or more
//! [`send_command()`](CatDispatcher::send_command) /
//! [`setup_split()`](CatDispatcher::setup_split) calls, then
//! [`release()`](CatDispatcher::release). No standing connection is kept
//! between actions.
//!
//! Releasing does not discard the backend: when the next initialize names
//! the same rig, the existing instance is reconfigured instead of
//! re-created. Configuration, not instantiation, is refreshed on every
//! cycle.

use std::time::Duration;

use tracing::{debug, warn};

use rigpreset_core::backend::{BackendFactory, RigBackend, ERROR_SENTINEL};
use rigpreset_core::error::{Error, Result};
use rigpreset_core::serial::{DataBits, Parity, SerialParams, StopBits};
use rigpreset_core::store::SectionStore;
use rigpreset_core::types::{OperatingMode, RigModel};
use rigpreset_presets::ActiveInterface;

/// Default response read timeout for dispatched commands.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Selects, configures, and forwards commands to one control backend.
///
/// Constructed with an injected [`BackendFactory`]; the dispatcher never
/// instantiates backends any other way, so tests can count and script
/// every instantiation.
pub struct CatDispatcher {
    factory: Box<dyn BackendFactory>,
    backend: Option<Box<dyn RigBackend>>,
}

impl CatDispatcher {
    /// Create an unbound dispatcher.
    pub fn new(factory: Box<dyn BackendFactory>) -> Self {
        CatDispatcher {
            factory,
            backend: None,
        }
    }

    /// The model of the currently bound backend, if any.
    pub fn bound_model(&self) -> Option<RigModel> {
        self.backend.as_ref().map(|b| b.model())
    }

    /// Bind and configure the backend named by the active interface
    /// section.
    ///
    /// Reads RIG, PORT, BAUD, DATA, PARITY and STOP from the store,
    /// resolves the rig against the model registry, re-instantiates the
    /// backend only when the rig changed, translates the stored strings
    /// into typed serial parameters, and configures the port. On success
    /// the backend's `init_rig` has run and commands may be dispatched.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedRig`] -- RIG is not in the registry; the
    ///   previously bound backend (if any) is untouched.
    /// - [`Error::InvalidParameter`] -- BAUD is not an integer.
    /// - [`Error::PortConfig`] -- the backend rejected the parameters.
    ///
    /// After the latter two the backend remains bound but unusable for
    /// this cycle; a later initialize may retry without re-instantiating.
    pub fn initialize(&mut self, store: &dyn SectionStore, read_timeout: Duration) -> Result<()> {
        let mut active = ActiveInterface::new();
        active.hydrate(store);

        let model: RigModel = match active.rig().parse() {
            Ok(m) => m,
            Err(_) => {
                warn!(rig = active.rig(), "rig not supported");
                return Err(Error::UnsupportedRig(active.rig().to_string()));
            }
        };

        // Reuse the bound backend when the rig is unchanged. A replaced
        // backend is dropped without close(): only release() closes.
        let mut backend = match self.backend.take() {
            Some(b) if b.model() == model => b,
            _ => {
                debug!(model = %model, "instantiating backend");
                self.factory.create(model)
            }
        };

        let baud: u32 = match active.baud().trim().parse() {
            Ok(b) => b,
            Err(_) => {
                self.backend = Some(backend);
                warn!(baud = active.baud(), "invalid baud rate");
                return Err(Error::InvalidParameter(format!(
                    "baud rate '{}'",
                    active.baud()
                )));
            }
        };

        let params = SerialParams {
            port: active.port().to_string(),
            baud,
            data_bits: DataBits::from_setting(active.data()),
            parity: Parity::from_setting(active.parity()),
            stop_bits: StopBits::from_setting(active.stop()),
            read_timeout,
        };

        match backend.configure_port(&params) {
            Ok(()) => {
                backend.init_rig();
                self.backend = Some(backend);
                Ok(())
            }
            Err(e) => {
                // Keep the backend for a retry with corrected parameters.
                self.backend = Some(backend);
                warn!(error = %e, "transceiver serial port configuration error");
                Err(Error::PortConfig(e.to_string()))
            }
        }
    }

    /// Forward one ASCII command line and return the raw response.
    ///
    /// The first whitespace-delimited token is the opcode; the remaining
    /// tokens are rejoined with single spaces as the argument text. A line
    /// with no tokens returns the ERROR sentinel without touching the
    /// backend, as does dispatch before any successful bind. Single
    /// attempt, no retry.
    pub fn send_command(&mut self, line: &str) -> String {
        let mut tokens = line.split_whitespace();
        let opcode = match tokens.next() {
            Some(t) => t,
            None => {
                return match &self.backend {
                    Some(b) => b.error_sentinel().to_string(),
                    None => ERROR_SENTINEL.to_string(),
                };
            }
        };
        let args = tokens.collect::<Vec<_>>().join(" ");

        let backend = match self.backend.as_mut() {
            Some(b) => b,
            None => {
                warn!(command = line, "no backend bound");
                return ERROR_SENTINEL.to_string();
            }
        };

        let response = backend.ascii_cmd(opcode, &args);
        debug!(command = line, response = %response, "CAT command");
        if response.contains(backend.error_sentinel()) {
            warn!(command = line, response = %response, "CAT command failed");
        }
        response
    }

    /// Set both VFOs, modes, and the split flag in a single backend call.
    ///
    /// Returns the backend's response (the sentinel when nothing is
    /// bound). The dispatcher guarantees exactly one backend call and
    /// nothing more; atomicity is the backend's concern.
    pub fn setup_split(
        &mut self,
        freq_a_hz: u64,
        mode_a: OperatingMode,
        split: bool,
        freq_b_hz: u64,
        mode_b: OperatingMode,
    ) -> String {
        match self.backend.as_mut() {
            Some(b) => b.configure_split(freq_a_hz, mode_a, split, freq_b_hz, mode_b),
            None => {
                warn!("no backend bound for split setup");
                ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Close the bound backend's port. A no-op when never bound.
    ///
    /// The backend stays allocated so the next initialize with the same
    /// rig skips re-instantiation.
    pub fn release(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigpreset_core::SectionStore as _;
    use rigpreset_store::MemoryStore;
    use rigpreset_test_harness::MockFactory;

    fn active_section(store: &mut MemoryStore, rig: &str) {
        store.set("CAT", "RIG", rig);
        store.set("CAT", "PORT", "/dev/ttyUSB0");
        store.set("CAT", "BAUD", "38400");
        store.set("CAT", "DATA", "8");
        store.set("CAT", "PARITY", "NONE");
        store.set("CAT", "STOP", "1");
    }

    fn dispatcher() -> (CatDispatcher, std::sync::Arc<std::sync::Mutex<rigpreset_test_harness::MockState>>) {
        let factory = MockFactory::new();
        let handle = factory.handle();
        (CatDispatcher::new(Box::new(factory)), handle)
    }

    #[test]
    fn initialize_binds_and_configures() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();

        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        assert_eq!(d.bound_model(), Some(RigModel::Ft817));

        let s = state.lock().unwrap();
        assert_eq!(s.created, vec![RigModel::Ft817]);
        assert_eq!(s.init_count, 1);
        let params = &s.configured[0];
        assert_eq!(params.port, "/dev/ttyUSB0");
        assert_eq!(params.baud, 38_400);
        assert_eq!(params.data_bits, DataBits::Eight);
        assert_eq!(params.parity, Parity::None);
        assert_eq!(params.stop_bits, StopBits::One);
        assert_eq!(params.read_timeout, DEFAULT_READ_TIMEOUT);
    }

    #[test]
    fn initialize_translates_serial_settings() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-991");
        store.set("CAT", "DATA", "7");
        store.set("CAT", "PARITY", "EVEN");
        store.set("CAT", "STOP", "1.5");
        let (mut d, state) = dispatcher();

        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        let s = state.lock().unwrap();
        let params = &s.configured[0];
        assert_eq!(params.data_bits, DataBits::Seven);
        assert_eq!(params.parity, Parity::Even);
        assert_eq!(params.stop_bits, StopBits::OnePointFive);
    }

    #[test]
    fn initialize_same_rig_reuses_backend() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();

        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        let s = state.lock().unwrap();
        assert_eq!(s.created.len(), 1);
        // Reconfigured both times.
        assert_eq!(s.configured.len(), 2);
        assert_eq!(s.init_count, 2);
    }

    #[test]
    fn initialize_new_rig_replaces_backend_without_close() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();

        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        store.set("CAT", "RIG", "FT-991");
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        assert_eq!(d.bound_model(), Some(RigModel::Ft991));
        let s = state.lock().unwrap();
        assert_eq!(s.created, vec![RigModel::Ft817, RigModel::Ft991]);
        // Only release() closes; replacement does not.
        assert_eq!(s.close_count, 0);
    }

    #[test]
    fn initialize_unsupported_rig_leaves_state_unchanged() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        store.set("CAT", "RIG", "FT-1000");
        let err = d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::UnsupportedRig(_)));
        assert_eq!(d.bound_model(), Some(RigModel::Ft817));
        assert_eq!(state.lock().unwrap().created.len(), 1);
    }

    #[test]
    fn initialize_rejects_lowercase_rig_name() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "ft-817");
        let (mut d, _state) = dispatcher();
        assert!(matches!(
            d.initialize(&store, DEFAULT_READ_TIMEOUT),
            Err(Error::UnsupportedRig(_))
        ));
        assert_eq!(d.bound_model(), None);
    }

    #[test]
    fn initialize_invalid_baud_keeps_backend() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "IC-7000");
        store.set("CAT", "BAUD", "fast");
        let (mut d, state) = dispatcher();

        let err = d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        // Instantiated before parameter translation, and kept.
        assert_eq!(d.bound_model(), Some(RigModel::Ic7000));
        let s = state.lock().unwrap();
        assert_eq!(s.created.len(), 1);
        assert!(s.configured.is_empty());
        assert_eq!(s.init_count, 0);
    }

    #[test]
    fn initialize_port_failure_keeps_backend_for_retry() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-991");
        let factory = MockFactory::new();
        factory.fail_configure(true);
        let handle = factory.handle();
        let mut d = CatDispatcher::new(Box::new(factory));

        let err = d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::PortConfig(_)));
        assert_eq!(d.bound_model(), Some(RigModel::Ft991));
        assert_eq!(handle.lock().unwrap().init_count, 0);

        // Retry succeeds without a second instantiation.
        handle.lock().unwrap().fail_configure = false;
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        let s = handle.lock().unwrap();
        assert_eq!(s.created.len(), 1);
        assert_eq!(s.init_count, 1);
    }

    #[test]
    fn send_command_forwards_opcode_and_args() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        state
            .lock()
            .unwrap()
            .responses
            .push_back("146520000".to_string());

        let resp = d.send_command("FREQA 146520000");
        assert_eq!(resp, "146520000");
        let s = state.lock().unwrap();
        assert_eq!(s.ascii_log, vec![("FREQA".into(), "146520000".into())]);
    }

    #[test]
    fn send_command_rejoins_extra_whitespace() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        d.send_command("  TONE   ENC   1318 ");
        let s = state.lock().unwrap();
        assert_eq!(s.ascii_log, vec![("TONE".into(), "ENC 1318".into())]);
    }

    #[test]
    fn send_command_opcode_only_has_empty_args() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        d.send_command("FREQA");
        let s = state.lock().unwrap();
        assert_eq!(s.ascii_log, vec![("FREQA".into(), "".into())]);
    }

    #[test]
    fn send_command_empty_returns_sentinel_without_backend_call() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        assert_eq!(d.send_command(""), ERROR_SENTINEL);
        assert_eq!(d.send_command("   "), ERROR_SENTINEL);
        assert!(state.lock().unwrap().ascii_log.is_empty());
    }

    #[test]
    fn send_command_unbound_returns_sentinel() {
        let (mut d, state) = dispatcher();
        assert_eq!(d.send_command("FREQA 146520000"), ERROR_SENTINEL);
        assert!(state.lock().unwrap().ascii_log.is_empty());
    }

    #[test]
    fn setup_split_is_a_single_pass_through() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "IC-7000");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        let resp = d.setup_split(
            146_640_000,
            OperatingMode::FM,
            true,
            146_040_000,
            OperatingMode::USB,
        );
        assert_eq!(resp, "OK");
        let s = state.lock().unwrap();
        assert_eq!(s.split_log.len(), 1);
        let call = &s.split_log[0];
        assert_eq!(call.freq_a_hz, 146_640_000);
        assert_eq!(call.mode_a, OperatingMode::FM);
        assert!(call.split);
        assert_eq!(call.freq_b_hz, 146_040_000);
        assert_eq!(call.mode_b, OperatingMode::USB);
    }

    #[test]
    fn release_closes_but_keeps_backend() {
        let mut store = MemoryStore::new();
        active_section(&mut store, "FT-817");
        let (mut d, state) = dispatcher();
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();

        d.release();
        assert_eq!(state.lock().unwrap().close_count, 1);
        assert_eq!(d.bound_model(), Some(RigModel::Ft817));

        // Next cycle with the same rig reconfigures, not re-creates.
        d.initialize(&store, DEFAULT_READ_TIMEOUT).unwrap();
        assert_eq!(state.lock().unwrap().created.len(), 1);
    }

    #[test]
    fn release_when_never_bound_is_a_no_op() {
        let (mut d, state) = dispatcher();
        d.release();
        assert_eq!(state.lock().unwrap().close_count, 0);
    }
}
