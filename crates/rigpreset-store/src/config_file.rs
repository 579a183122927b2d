//! INI-format file-backed [`SectionStore`].
//!
//! The durable form of all preset data is a single text file of
//! `[SECTION]` headers followed by `KEY = value` pairs. The file is read
//! once at open; `set` mutates the in-memory view and [`write()`] rewrites
//! the whole file. Section and key order is preserved so hand edits and
//! diffs stay readable.
//!
//! [`write()`]: rigpreset_core::SectionStore::write
//!
//! # File format
//!
//! ```text
//! [CAT]
//! RIG = FT-991
//! PORT = /dev/ttyUSB0
//!
//! [MEMORY_PRESET001]
//! PRESET_DESC = 2m calling
//! VFOA_FREQ_MHZ = 146.520000
//! ```
//!
//! Blank lines and lines starting with `#` or `;` are ignored on parse and
//! not preserved. Keys and values are trimmed of surrounding whitespace.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use rigpreset_core::error::Result;
use rigpreset_core::store::SectionStore;

/// One named section: ordered key/value pairs.
#[derive(Debug, Clone, Default)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// INI-format file-backed section store.
///
/// See the [module documentation](self) for the file format. All mutation
/// is in-memory until [`write()`](SectionStore::write) is called.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    sections: Vec<Section>,
}

impl ConfigFile {
    /// Open a config file, loading its contents if it exists.
    ///
    /// A missing file is not an error: the store starts empty and the file
    /// is created by the first [`write()`](SectionStore::write). A file
    /// that exists but cannot be read is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut store = ConfigFile {
            path,
            sections: Vec::new(),
        };
        if store.path.exists() {
            let text = fs::read_to_string(&store.path)?;
            store.parse(&text);
            debug!(
                path = %store.path.display(),
                sections = store.sections.len(),
                "loaded config file"
            );
        }
        Ok(store)
    }

    /// The path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All section names, in file order.
    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    fn parse(&mut self, text: &str) {
        self.sections.clear();
        // Index of the section named by the most recent header. A repeated
        // header re-selects the existing section, so its keys merge there
        // instead of landing in whichever section was parsed last.
        let mut current: Option<usize> = None;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim();
                self.add_section(name);
                current = self.sections.iter().position(|s| s.name == name);
            } else if let Some((key, value)) = line.split_once('=') {
                // Key/value lines before any section header are dropped.
                if let Some(idx) = current {
                    self.sections[idx].set(key.trim(), value.trim());
                }
            }
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn find(&self, section: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == section)
    }

    fn find_mut(&mut self, section: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == section)
    }
}

impl SectionStore for ConfigFile {
    fn get(&self, section: &str, key: &str) -> String {
        self.find(section)
            .and_then(|s| s.get(key))
            .unwrap_or_default()
            .to_string()
    }

    fn set(&mut self, section: &str, key: &str, value: &str) {
        self.add_section(section);
        if let Some(s) = self.find_mut(section) {
            s.set(key, value);
        }
    }

    fn has_section(&self, section: &str) -> bool {
        self.find(section).is_some()
    }

    fn add_section(&mut self, section: &str) {
        if !self.has_section(section) {
            self.sections.push(Section {
                name: section.to_string(),
                entries: Vec::new(),
            });
        }
    }

    fn write(&mut self) -> Result<()> {
        fs::write(&self.path, self.render())?;
        debug!(path = %self.path.display(), "wrote config file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigFile::open(temp_path(&dir, "missing.ini")).unwrap();
        assert!(store.section_names().is_empty());
        assert_eq!(store.get("CAT", "RIG"), "");
    }

    #[test]
    fn get_missing_section_or_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigFile::open(temp_path(&dir, "empty.ini")).unwrap();
        store.set("CAT", "RIG", "FT-991");
        assert_eq!(store.get("CAT", "PORT"), "");
        assert_eq!(store.get("NOPE", "RIG"), "");
    }

    #[test]
    fn set_auto_vivifies_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigFile::open(temp_path(&dir, "viv.ini")).unwrap();
        assert!(!store.has_section("CAT_PRESET001"));
        store.set("CAT_PRESET001", "PRESET_NAME", "Home");
        assert!(store.has_section("CAT_PRESET001"));
        assert_eq!(store.get("CAT_PRESET001", "PRESET_NAME"), "Home");
    }

    #[test]
    fn add_section_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigFile::open(temp_path(&dir, "idem.ini")).unwrap();
        store.set("CAT", "RIG", "FT-817");
        store.add_section("CAT");
        store.add_section("CAT");
        assert_eq!(store.get("CAT", "RIG"), "FT-817");
        assert_eq!(store.section_names(), vec!["CAT"]);
    }

    #[test]
    fn set_overwrites_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigFile::open(temp_path(&dir, "overwrite.ini")).unwrap();
        store.set("CAT", "BAUD", "4800");
        store.set("CAT", "BAUD", "38400");
        assert_eq!(store.get("CAT", "BAUD"), "38400");
    }

    #[test]
    fn write_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "roundtrip.ini");
        let mut store = ConfigFile::open(&path).unwrap();
        store.set("CAT", "RIG", "IC-7000");
        store.set("CAT", "PORT", "/dev/ttyUSB0");
        store.set("MEMORY_PRESET005", "PRESET_DESC", "Sat A");
        store.set("MEMORY_PRESET005", "VFOA_FREQ_MHZ", "146.640000");
        store.write().unwrap();

        let reopened = ConfigFile::open(&path).unwrap();
        assert_eq!(reopened.get("CAT", "RIG"), "IC-7000");
        assert_eq!(reopened.get("CAT", "PORT"), "/dev/ttyUSB0");
        assert_eq!(reopened.get("MEMORY_PRESET005", "PRESET_DESC"), "Sat A");
        assert_eq!(
            reopened.get("MEMORY_PRESET005", "VFOA_FREQ_MHZ"),
            "146.640000"
        );
        assert_eq!(reopened.section_names(), store.section_names());
    }

    #[test]
    fn parse_ignores_comments_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "comments.ini");
        fs::write(
            &path,
            "# header comment\n\n[CAT]\n; a comment\nRIG = FT-991\n\nPORT=COM3\n",
        )
        .unwrap();
        let store = ConfigFile::open(&path).unwrap();
        assert_eq!(store.get("CAT", "RIG"), "FT-991");
        assert_eq!(store.get("CAT", "PORT"), "COM3");
    }

    #[test]
    fn parse_trims_keys_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "trim.ini");
        fs::write(&path, "[CAT]\n  BAUD  =  9600  \n").unwrap();
        let store = ConfigFile::open(&path).unwrap();
        assert_eq!(store.get("CAT", "BAUD"), "9600");
    }

    #[test]
    fn repeated_section_header_merges_into_existing_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "dup.ini");
        fs::write(
            &path,
            "[CAT]\nRIG = FT-991\n\n[MEMORY_PRESET001]\nPRESET_DESC = 2m calling\n\n\
             [CAT]\nPORT = COM3\n",
        )
        .unwrap();
        let store = ConfigFile::open(&path).unwrap();
        assert_eq!(store.get("CAT", "RIG"), "FT-991");
        assert_eq!(store.get("CAT", "PORT"), "COM3");
        assert_eq!(store.get("MEMORY_PRESET001", "PORT"), "");
        assert_eq!(store.get("MEMORY_PRESET001", "PRESET_DESC"), "2m calling");
        assert_eq!(store.section_names(), vec!["CAT", "MEMORY_PRESET001"]);
    }

    #[test]
    fn values_may_contain_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "spaces.ini");
        let mut store = ConfigFile::open(&path).unwrap();
        store.set("CONFIG_PRESET001", "CMD001", "MODE USB");
        store.write().unwrap();
        let reopened = ConfigFile::open(&path).unwrap();
        assert_eq!(reopened.get("CONFIG_PRESET001", "CMD001"), "MODE USB");
    }
}
