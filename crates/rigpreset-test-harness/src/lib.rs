//! rigpreset-test-harness: Mock backends for rigpreset.
//!
//! Provides [`MockBackend`] and [`MockFactory`] for deterministic unit
//! testing of the dispatcher and the composite actions without real radio
//! hardware.

pub mod mock_backend;

pub use mock_backend::{MockBackend, MockFactory, MockState, SplitCall};
