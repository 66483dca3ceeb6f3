// File: src/core/vocabulary.rs
use crate::core::vectors::VectorStore;
use crate::error::{GameError, GameResult, LoadError};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum WordListFile {
    Wrapped { words: Vec<String> },
    Bare(Vec<String>),
}

/// Reads a word list: `{"words": [...]}` or a bare JSON array for `.json`
/// files, one word per line otherwise. Words are lowercased and trimmed.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let reader = BufReader::new(file);

    let raw = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        match serde_json::from_reader(reader)
            .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?
        {
            WordListFile::Wrapped { words } | WordListFile::Bare(words) => words,
        }
    } else {
        reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?
    };

    Ok(raw
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect())
}

/// The curated pool of daily target words. Every word has a vector.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    words: Vec<String>,
}

impl VocabularyIndex {
    /// Validation pass: lowercases, dedups, sorts, and drops words the store
    /// has no vector for. An empty result is a configuration error.
    pub fn from_words<I, S>(words: I, store: &VectorStore) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = BTreeSet::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if store.contains(&word) {
                kept.insert(word);
            } else {
                warn!("Word \"{}\" not found in vectors, excluding from target words", word);
            }
        }
        if kept.is_empty() {
            return Err(GameError::Configuration("no valid target words found in vectors".into()));
        }
        info!("Loaded {} valid target words", kept.len());
        Ok(Self { words: kept.into_iter().collect() })
    }

    pub fn load(path: &Path, store: &VectorStore) -> GameResult<Self> {
        let words = load_word_list(path)?;
        Self::from_words(words, store)
    }

    /// Sorted, so index positions are stable across restarts.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Words accepted as guesses beyond the vector vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    extra: HashSet<String>,
}

impl Lexicon {
    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        Self { extra: words.into_iter().collect() }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let lexicon = Self::from_words(load_word_list(path)?);
        info!("Loaded {} dictionary words from {}", lexicon.extra.len(), path.display());
        Ok(lexicon)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.extra.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> VectorStore {
        VectorStore::from_entries(vec![
            ("ocean".to_string(), vec![1.0, 0.0]),
            ("river".to_string(), vec![0.8, 0.2]),
        ])
        .unwrap()
    }

    #[test]
    fn drops_words_without_vectors() {
        let vocab = VocabularyIndex::from_words(["River", "ocean", "zebra", "ocean", ""], &store()).unwrap();
        assert_eq!(vocab.words(), &["ocean".to_string(), "river".to_string()]);
        assert!(vocab.contains("river"));
        assert!(!vocab.contains("zebra"));
    }

    #[test]
    fn no_surviving_words_is_a_configuration_error() {
        let err = VocabularyIndex::from_words(["zebra"], &store()).unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn reads_wrapped_bare_and_plain_lists() {
        let dir = TempDir::new().unwrap();
        let wrapped = dir.path().join("daily-words.json");
        std::fs::write(&wrapped, r#"{"words": ["Ocean", "river"], "startDate": "2024-01-01"}"#).unwrap();
        assert_eq!(load_word_list(&wrapped).unwrap(), vec!["ocean", "river"]);

        let bare = dir.path().join("bare.json");
        std::fs::write(&bare, r#"["sea"]"#).unwrap();
        assert_eq!(load_word_list(&bare).unwrap(), vec!["sea"]);

        let plain = dir.path().join("words.txt");
        std::fs::write(&plain, "apple\n\n  Banana \n").unwrap();
        let lexicon = Lexicon::load(&plain).unwrap();
        assert!(lexicon.contains("banana"));
        assert!(!lexicon.contains("cherry"));
    }
}
