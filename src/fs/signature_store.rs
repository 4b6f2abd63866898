use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::FsError;
use crate::hashing::HashKind;
use crate::minhash::MinHash;

/// One named signature, as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSignature {
    pub name: String,
    pub values: Vec<u64>,
}

/// A set of named signatures sharing one size and one hash function.
///
/// On disk:
/// ```json
/// { "size": 2, "hash": "xxh3-128", "entries": [ { "name": "a.txt", "values": [17, 4] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureStore {
    pub size: usize,
    pub hash: HashKind,
    entries: Vec<StoredSignature>,
}

impl SignatureStore {
    /// Creates an empty store for `size`-slot signatures hashed with `hash`.
    ///
    /// # Errors
    /// Returns [`FsError::ZeroSize`] when `size == 0`
    pub fn new(size: usize, hash: HashKind) -> Result<Self, FsError> {
        if size == 0 {
            return Err(FsError::ZeroSize);
        }
        Ok(SignatureStore {
            size,
            hash,
            entries: Vec::new(),
        })
    }

    /// Reads a store from `path` and checks the declared size and every entry against it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store: SignatureStore =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| FsError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if store.size == 0 {
            return Err(FsError::ZeroSize);
        }
        for entry in &store.entries {
            store.check_len(&entry.name, entry.values.len())?;
        }

        info!(
            path = %path.display(),
            entries = store.entries.len(),
            size = store.size,
            hash = %store.hash,
            "loaded signature store"
        );
        Ok(store)
    }

    /// Checks that this store holds `size`-slot signatures produced by `hash`.
    pub fn ensure_compatible(&self, size: usize, hash: HashKind) -> Result<(), FsError> {
        if self.size != size || self.hash != hash {
            warn!(
                stored_size = self.size,
                stored_hash = %self.hash,
                size,
                hash = %hash,
                "signature store does not match the requested parameters"
            );
            return Err(FsError::Incompatible {
                expected_size: size,
                expected_hash: hash,
                found_size: self.size,
                found_hash: self.hash,
            });
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FsError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| FsError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| FsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(io_err)?;

        info!(path = %path.display(), entries = self.entries.len(), "saved signature store");
        Ok(())
    }

    /// Stores `values` under `name`, replacing any previous entry with that name.
    pub fn insert(&mut self, name: impl Into<String>, values: &[u64]) -> Result<(), FsError> {
        let name = name.into();
        self.check_len(&name, values.len())?;

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            debug!(name = %name, "replacing stored signature");
            entry.values.clear();
            entry.values.extend_from_slice(values);
            return Ok(());
        }
        self.entries.push(StoredSignature {
            name,
            values: values.to_vec(),
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&[u64]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.values.as_slice())
    }

    pub fn entries(&self) -> &[StoredSignature] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds one engine per entry, each owning a copy of the stored slots.
    pub fn engines(&self) -> Vec<(String, MinHash<HashKind>)> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), MinHash::from_signature(self.hash, &e.values)))
            .collect()
    }

    fn check_len(&self, name: &str, found: usize) -> Result<(), FsError> {
        if found != self.size {
            return Err(FsError::SizeMismatch {
                name: name.to_string(),
                expected: self.size,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_store() -> SignatureStore {
        let mut store = SignatureStore::new(4, HashKind::Murmur3).unwrap();
        store.insert("a.txt", &[1, 2, 3, 4]).unwrap();
        store.insert("b.txt", &[5, 6, 7, u64::MAX]).unwrap();
        store
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigs.json");
        let store = sample_store();

        store.save(&path).unwrap();
        let loaded = SignatureStore::load(&path).unwrap();

        assert_eq!(loaded, store);
        assert_eq!(loaded.get("b.txt"), Some(&[5, 6, 7, u64::MAX][..]));
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut store = sample_store();
        store.insert("a.txt", &[0, 0, 0, 0]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a.txt"), Some(&[0, 0, 0, 0][..]));
    }

    #[test]
    fn test_insert_rejects_wrong_size() {
        let mut store = sample_store();
        let err = store.insert("c.txt", &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            FsError::SizeMismatch {
                expected: 4,
                found: 3,
                ..
            }
        ));
        assert!(store.get("c.txt").is_none());
    }

    #[test]
    fn test_load_rejects_wrong_entry_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"size": 3, "hash": "xxh3-128", "entries": [{"name": "x", "values": [1, 2]}]}"#,
        )
        .unwrap();

        let err = SignatureStore::load(&path).unwrap_err();
        assert!(matches!(err, FsError::SizeMismatch { found: 2, .. }));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json").unwrap();

        let err = SignatureStore::load(&path).unwrap_err();
        assert!(matches!(err, FsError::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SignatureStore::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FsError::Io { .. }));
    }

    #[test]
    fn test_engines_resume_from_stored_values() {
        let mut engine = MinHash::new(HashKind::Xxh3, 16);
        engine.push_strings(["it", "was", "the"]);

        let mut store = SignatureStore::new(16, HashKind::Xxh3).unwrap();
        store.insert("doc", engine.signature()).unwrap();

        let stored = engine.signature().to_vec();

        let (name, mut resumed) = store.engines().remove(0);
        assert_eq!(name, "doc");
        assert_eq!(resumed.signature(), engine.signature());

        resumed.push_strings(["best", "of", "times"]);
        engine.push_strings(["best", "of", "times"]);
        assert_eq!(resumed.signature(), engine.signature());
        assert_eq!(store.get("doc"), Some(&stored[..]));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let err = SignatureStore::new(0, HashKind::Xxh3).unwrap_err();
        assert!(matches!(err, FsError::ZeroSize));
    }

    #[test]
    fn test_load_rejects_zero_size_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.json");
        fs::write(
            &path,
            r#"{"size": 0, "hash": "xxh3-128", "entries": [{"name": "x", "values": []}]}"#,
        )
        .unwrap();

        let err = SignatureStore::load(&path).unwrap_err();
        assert!(matches!(err, FsError::ZeroSize));
    }

    #[test]
    fn test_ensure_compatible() {
        let store = sample_store();
        assert!(store.ensure_compatible(4, HashKind::Murmur3).is_ok());

        let err = store.ensure_compatible(4, HashKind::Xxh3).unwrap_err();
        assert!(matches!(
            err,
            FsError::Incompatible {
                expected_hash: HashKind::Xxh3,
                found_hash: HashKind::Murmur3,
                ..
            }
        ));

        let err = store.ensure_compatible(8, HashKind::Murmur3).unwrap_err();
        assert!(matches!(
            err,
            FsError::Incompatible {
                expected_size: 8,
                found_size: 4,
                ..
            }
        ));
    }
}
