//! rigpreset-store: Section-keyed configuration stores for rigpreset.
//!
//! Provides the two [`SectionStore`](rigpreset_core::SectionStore)
//! implementations used by the workspace:
//!
//! - [`ConfigFile`] -- INI-format text file, the durable form of all
//!   preset data.
//! - [`MemoryStore`] -- volatile store for tests and dry runs.

pub mod config_file;
pub mod memory;

pub use config_file::ConfigFile;
pub use memory::MemoryStore;
