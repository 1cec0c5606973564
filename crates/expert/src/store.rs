#![forbid(unsafe_code)]

//! Durable storage for the knowledge base.
//!
//! The file format is a pretty-printed UTF-8 JSON document holding
//! `startup_lines` and `intents`. Every save rewrites the whole file.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExpertError, Result};
use crate::knowledge::KnowledgeBase;

/// Backend able to load and fully overwrite a knowledge base.
pub trait KnowledgeStore {
    /// Return the persisted base, seeding and persisting the default one
    /// when nothing has been stored yet.
    fn load(&mut self) -> Result<KnowledgeBase>;

    /// Replace the stored base with `kb`.
    fn save(&mut self, kb: &KnowledgeBase) -> Result<()>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. Nothing is touched until `load`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the knowledge file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KnowledgeStore for JsonFileStore {
    fn load(&mut self) -> Result<KnowledgeBase> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "knowledge file missing, seeding default base");
                let kb = KnowledgeBase::seed();
                self.save(&kb)?;
                return Ok(kb);
            }
            Err(source) => {
                return Err(ExpertError::LoadKnowledge {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let kb: KnowledgeBase =
            serde_json::from_str(&text).map_err(|source| ExpertError::ParseKnowledge {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            intents = kb.intents.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    fn save(&mut self, kb: &KnowledgeBase) -> Result<()> {
        let save_err = |source: io::Error| ExpertError::SaveKnowledge {
            path: self.path.clone(),
            source,
        };
        let json = serde_json::to_string_pretty(kb).map_err(|e| save_err(io::Error::from(e)))?;
        fs::write(&self.path, json).map_err(save_err)?;
        debug!(path = %self.path.display(), intents = kb.intents.len(), "knowledge base saved");
        Ok(())
    }
}

/// In-process store, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<KnowledgeBase>,
    saves: usize,
}

impl MemoryStore {
    /// Empty store; the first `load` seeds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `kb`.
    pub fn with_base(kb: KnowledgeBase) -> Self {
        Self {
            stored: Some(kb),
            saves: 0,
        }
    }

    /// Currently stored base, if any.
    pub fn stored(&self) -> Option<&KnowledgeBase> {
        self.stored.as_ref()
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl KnowledgeStore for MemoryStore {
    fn load(&mut self) -> Result<KnowledgeBase> {
        match &self.stored {
            Some(kb) => Ok(kb.clone()),
            None => {
                let kb = KnowledgeBase::seed();
                self.save(&kb)?;
                Ok(kb)
            }
        }
    }

    fn save(&mut self, kb: &KnowledgeBase) -> Result<()> {
        self.stored = Some(kb.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Intent;

    #[test]
    fn missing_file_is_seeded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        let mut store = JsonFileStore::new(&path);

        let kb = store.load().unwrap();
        assert_eq!(kb, KnowledgeBase::seed());
        assert!(path.exists());

        let again = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(again, kb);
    }

    #[test]
    fn save_then_load_preserves_order_and_accents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        let mut store = JsonFileStore::new(&path);

        let kb = KnowledgeBase {
            startup_lines: vec!["¡Buenas!".into(), "Ñandú 🧠".into()],
            intents: vec![
                Intent::new(&["zeta", "alfa"], &["¿Qué?"]),
                Intent::new(&["canción"], &["é", "à", "ü"]),
            ],
        };
        store.save(&kb).unwrap();
        assert_eq!(store.load().unwrap(), kb);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Ñandú"), "non-ASCII text is written verbatim");
    }

    #[test]
    fn save_fully_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("kb.json"));
        store.save(&KnowledgeBase::seed()).unwrap();

        let small = KnowledgeBase {
            startup_lines: vec![],
            intents: vec![Intent::new(&["x"], &["y"])],
        };
        store.save(&small).unwrap();
        assert_eq!(store.load().unwrap(), small);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ExpertError::ParseKnowledge { .. }));
        // the broken file is left alone
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn unwritable_location_reports_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("kb.json");
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ExpertError::SaveKnowledge { .. }));
    }

    #[test]
    fn memory_store_seeds_once() {
        let mut store = MemoryStore::new();
        let kb = store.load().unwrap();
        assert_eq!(kb, KnowledgeBase::seed());
        assert_eq!(store.saves(), 1);
        store.load().unwrap();
        assert_eq!(store.saves(), 1);
    }
}
