// File: src/core/vectors.rs
use crate::core::types::WordVector;
use crate::error::LoadError;
use crate::persistence::write_atomic;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Immutable word -> vector table, loaded once at startup.
///
/// Words keep their load order (frequency order for GloVe files, sorted for
/// JSON objects) so scans over the table are deterministic.
#[derive(Debug, Clone)]
pub struct VectorStore {
    dimension: usize,
    words: Vec<String>,
    vectors: Vec<WordVector>,
    index: HashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    dimension: usize,
    entries: Vec<(String, WordVector)>,
}

impl VectorStore {
    /// Builds a store, rejecting any vector whose length differs from the first.
    /// Later duplicates of a word are ignored.
    pub fn from_entries<I>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (String, WordVector)>,
    {
        let mut store = Self { dimension: 0, words: Vec::new(), vectors: Vec::new(), index: HashMap::new() };
        for (word, vector) in entries {
            if store.words.is_empty() {
                store.dimension = vector.len();
            } else if vector.len() != store.dimension {
                return Err(LoadError::DimensionMismatch {
                    word,
                    expected: store.dimension,
                    found: vector.len(),
                });
            }
            if store.index.contains_key(&word) {
                continue;
            }
            store.index.insert(word.clone(), store.words.len());
            store.words.push(word);
            store.vectors.push(vector);
        }
        Ok(store)
    }

    /// Loads a `.bin` snapshot, a `.json` object or a GloVe text file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let io_err = |source| LoadError::Io { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);

        let store = match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => {
                let snapshot: Snapshot = bincode::deserialize_from(reader)
                    .map_err(|source| LoadError::Bincode { path: path.to_path_buf(), source })?;
                let store = Self::from_entries(snapshot.entries)?;
                if !store.is_empty() && store.dimension != snapshot.dimension {
                    return Err(LoadError::DimensionMismatch {
                        word: store.words[0].clone(),
                        expected: snapshot.dimension,
                        found: store.dimension,
                    });
                }
                store
            }
            Some("json") => {
                let table: BTreeMap<String, WordVector> = serde_json::from_reader(reader)
                    .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;
                Self::from_entries(table)?
            }
            _ => Self::from_entries(parse_glove(reader, path)?)?,
        };

        if store.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }
        info!(
            "Loaded {} word vectors ({} dimensions) from {}",
            store.len(),
            store.dimension,
            path.display()
        );
        Ok(store)
    }

    /// [`load`](Self::load) with a bounded retry on I/O failures.
    pub fn load_with_retry(path: &Path, attempts: u32, backoff: Duration) -> Result<Self, LoadError> {
        let attempts = attempts.max(1);
        let mut attempt = 1;
        loop {
            match Self::load(path) {
                Ok(store) => return Ok(store),
                Err(e) if e.is_transient() && attempt < attempts => {
                    warn!("Vector load attempt {}/{} failed: {}. Retrying in {:?}", attempt, attempts, e, backoff);
                    std::thread::sleep(backoff);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes a compact snapshot that [`load`](Self::load) reads back from a `.bin` path.
    pub fn save_snapshot(&self, path: &Path) -> std::io::Result<()> {
        let snapshot = Snapshot {
            dimension: self.dimension,
            entries: self.words.iter().cloned().zip(self.vectors.iter().cloned()).collect(),
        };
        let bytes = bincode::serialize(&snapshot)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        write_atomic(path, &bytes)
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&i| self.vectors[i].as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.words.iter().map(String::as_str).zip(self.vectors.iter().map(Vec::as_slice))
    }
}

fn parse_glove<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(String, WordVector)>, LoadError> {
    let mut entries = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else { continue };
        let vector = parts
            .map(str::parse::<f32>)
            .collect::<Result<WordVector, _>>()
            .map_err(|e| LoadError::Malformed {
                path: path.to_path_buf(),
                line: n + 1,
                reason: e.to_string(),
            })?;
        if vector.is_empty() {
            return Err(LoadError::Malformed {
                path: path.to_path_buf(),
                line: n + 1,
                reason: format!("'{}' has no components", word),
            });
        }
        entries.push((word.to_string(), vector));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(word: &str, v: &[f32]) -> (String, WordVector) {
        (word.to_string(), v.to_vec())
    }

    #[test]
    fn dimension_mismatch_is_fatal() {
        let err = VectorStore::from_entries(vec![entry("sea", &[1.0, 0.0]), entry("sand", &[1.0])]).unwrap_err();
        assert!(matches!(err, LoadError::DimensionMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn loads_json_object_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vectors.json");
        std::fs::write(&path, r#"{"wave": [0.0, 1.0], "ocean": [1.0, 0.5]}"#).unwrap();

        let store = VectorStore::load(&path).unwrap();
        assert_eq!(store.dimension(), 2);
        let words: Vec<&str> = store.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["ocean", "wave"]);
        assert_eq!(store.get("wave"), Some(&[0.0f32, 1.0][..]));
        assert!(store.get("river").is_none());
    }

    #[test]
    fn loads_glove_text_and_reports_bad_lines() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("glove.txt");
        std::fs::write(&good, "the 0.1 0.2 0.3\nocean 0.5 -0.2 0.9\n\n").unwrap();
        let store = VectorStore::load(&good).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimension(), 3);

        let bad = dir.path().join("broken.txt");
        std::fs::write(&bad, "the 0.1 0.2\nocean 0.5 nope\n").unwrap();
        let err = VectorStore::load(&bad).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
    }

    #[test]
    fn snapshot_reloads_identically() {
        let dir = TempDir::new().unwrap();
        let store = VectorStore::from_entries(vec![entry("sea", &[0.3, 0.4]), entry("sand", &[0.9, -0.1])]).unwrap();
        let path = dir.path().join("vectors.bin");
        store.save_snapshot(&path).unwrap();

        let reloaded = VectorStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("sand"), store.get("sand"));
        let order: Vec<&str> = reloaded.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["sea", "sand"]);
    }

    #[test]
    fn empty_or_missing_sources_fail() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "{}").unwrap();
        assert!(matches!(VectorStore::load(&empty), Err(LoadError::Empty(_))));

        let missing = dir.path().join("missing.json");
        let err = VectorStore::load_with_retry(&missing, 2, Duration::from_millis(1)).unwrap_err();
        assert!(err.is_transient());
    }
}
