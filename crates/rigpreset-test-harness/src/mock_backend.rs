//! Mock backend and factory for deterministic testing without hardware.
//!
//! [`MockFactory`] implements [`BackendFactory`] and hands out
//! [`MockBackend`] instances that all record into one shared
//! [`MockState`]. Tests hold a handle to the state and assert on what the
//! dispatcher did: how many backends were instantiated, which serial
//! parameters were translated, which commands were forwarded, and whether
//! `close()` ran.
//!
//! ASCII responses can be scripted; unscripted commands answer `"OK"`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use rigpreset_core::backend::{BackendFactory, RigBackend};
use rigpreset_core::error::{Error, Result};
use rigpreset_core::serial::SerialParams;
use rigpreset_core::types::{OperatingMode, RigModel};

/// One recorded `configure_split` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCall {
    /// VFO-A frequency in hertz.
    pub freq_a_hz: u64,
    /// VFO-A operating mode.
    pub mode_a: OperatingMode,
    /// Split flag.
    pub split: bool,
    /// VFO-B frequency in hertz.
    pub freq_b_hz: u64,
    /// VFO-B operating mode.
    pub mode_b: OperatingMode,
}

/// Shared recording state for all mock backends from one factory.
#[derive(Debug, Default)]
pub struct MockState {
    /// Models instantiated, in order. One entry per `create()` call.
    pub created: Vec<RigModel>,
    /// Serial parameters from each `configure_port` call.
    pub configured: Vec<SerialParams>,
    /// Number of `init_rig` calls.
    pub init_count: usize,
    /// Each forwarded ASCII command as (opcode, args).
    pub ascii_log: Vec<(String, String)>,
    /// Each `configure_split` call.
    pub split_log: Vec<SplitCall>,
    /// Number of `close` calls.
    pub close_count: usize,
    /// When true, `configure_port` fails.
    pub fail_configure: bool,
    /// Scripted ASCII responses, consumed in order; empty means "OK".
    pub responses: VecDeque<String>,
    /// Response returned by `configure_split`.
    pub split_response: String,
}

impl MockState {
    fn new() -> Self {
        MockState {
            split_response: "OK".to_string(),
            ..Default::default()
        }
    }
}

/// A [`RigBackend`] that records every call into the factory's
/// [`MockState`].
#[derive(Debug)]
pub struct MockBackend {
    model: RigModel,
    state: Arc<Mutex<MockState>>,
}

impl RigBackend for MockBackend {
    fn model(&self) -> RigModel {
        self.model
    }

    fn configure_port(&mut self, params: &SerialParams) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.configured.push(params.clone());
        if state.fail_configure {
            return Err(Error::PortConfig("mock port rejected".into()));
        }
        Ok(())
    }

    fn init_rig(&mut self) {
        self.state.lock().unwrap().init_count += 1;
    }

    fn ascii_cmd(&mut self, opcode: &str, args: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state
            .ascii_log
            .push((opcode.to_string(), args.to_string()));
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| "OK".to_string())
    }

    fn configure_split(
        &mut self,
        freq_a_hz: u64,
        mode_a: OperatingMode,
        split: bool,
        freq_b_hz: u64,
        mode_b: OperatingMode,
    ) -> String {
        let mut state = self.state.lock().unwrap();
        state.split_log.push(SplitCall {
            freq_a_hz,
            mode_a,
            split,
            freq_b_hz,
            mode_b,
        });
        state.split_response.clone()
    }

    fn close(&mut self) {
        self.state.lock().unwrap().close_count += 1;
    }
}

/// A [`BackendFactory`] producing [`MockBackend`]s that share one
/// [`MockState`].
#[derive(Debug, Default)]
pub struct MockFactory {
    state: Arc<Mutex<MockState>>,
}

impl MockFactory {
    /// Create a factory with fresh state.
    pub fn new() -> Self {
        MockFactory {
            state: Arc::new(Mutex::new(MockState::new())),
        }
    }

    /// Lock and return the shared recording state.
    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// A clonable handle to the shared state, for asserting after the
    /// factory has been moved into a dispatcher.
    pub fn handle(&self) -> Arc<Mutex<MockState>> {
        Arc::clone(&self.state)
    }

    /// Number of backends instantiated so far.
    pub fn create_count(&self) -> usize {
        self.state().created.len()
    }

    /// Queue a scripted response for the next unanswered ASCII command.
    pub fn push_response(&self, response: &str) {
        self.state().responses.push_back(response.to_string());
    }

    /// Make every subsequent `configure_port` call fail.
    pub fn fail_configure(&self, fail: bool) {
        self.state().fail_configure = fail;
    }
}

impl BackendFactory for MockFactory {
    fn create(&self, model: RigModel) -> Box<dyn RigBackend> {
        let mut state = self.state.lock().unwrap();
        state.created.push(model);
        Box::new(MockBackend {
            model,
            state: Arc::clone(&self.state),
        })
    }
}
