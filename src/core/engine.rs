use crate::config::GameConfig;
use crate::core::normalizer::WordNormalizer;
use crate::core::similarity::{
    feedback, score_from_similarity, similarity_or_zero, HINT_MATCH_FEEDBACK, INVALID_FEEDBACK, UNRELATED_FEEDBACK,
};
use crate::core::types::{GuessOutcome, MatchKind};
use crate::core::vectors::VectorStore;
use crate::core::vocabulary::{Lexicon, VocabularyIndex};
use crate::error::GameResult;
use crate::hints::{self, HintRules, HintSelector};
use crate::scoring::PERFECT_SCORE;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Score for a recognized word that has no vector.
const UNRELATED_SCORE: u8 = 10;

// The engine is composed of the loaded tables and the stateless scorers.
// Nothing in it changes after construction except the hint cache.
pub struct GameEngine {
    store: VectorStore,
    targets: VocabularyIndex,
    lexicon: Lexicon,
    normalizer: WordNormalizer,
    hints: HintSelector,
    config: GameConfig,
}

impl GameEngine {
    /// Loads every table named in `config`. Blocks until the vectors are in.
    pub fn from_config(config: GameConfig) -> GameResult<Self> {
        let paths = &config.paths;
        let store = VectorStore::load_with_retry(
            &paths.vectors,
            paths.load_attempts,
            Duration::from_millis(paths.load_backoff_ms),
        )?;
        let targets = VocabularyIndex::load(&paths.targets, &store)?;
        let lexicon = match &paths.dictionary {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::default(),
        };
        Ok(Self::from_parts(config, store, targets, lexicon))
    }

    pub fn from_parts(config: GameConfig, store: VectorStore, targets: VocabularyIndex, lexicon: Lexicon) -> Self {
        info!("Engine ready: {} vectors, {} target words", store.len(), targets.len());
        Self {
            hints: HintSelector::new(config.hints.clone(), HintRules::standard()),
            normalizer: WordNormalizer::new(),
            store,
            targets,
            lexicon,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub fn targets(&self) -> &VocabularyIndex {
        &self.targets
    }

    /// A word the game accepts as a guess: it has a vector or is in the dictionary.
    pub fn is_recognized(&self, word: &str) -> bool {
        self.store.contains(word) || self.lexicon.contains(word)
    }

    /// Canonical recognized form of a typed word, trying the other regional
    /// spelling when the canonical one is unknown.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let canonical = self.normalizer.canonical(raw, |w| self.is_recognized(w));
        if canonical.is_empty() {
            return None;
        }
        if self.is_recognized(&canonical) {
            return Some(canonical);
        }
        self.normalizer
            .spelling_variant(&canonical)
            .filter(|variant| self.is_recognized(variant))
            .map(str::to_string)
    }

    pub fn related_words(&self, target: &str) -> Vec<String> {
        self.hints.cached_related_words(target, &self.store)
    }

    /// The day's three hints for `target`.
    pub fn hint_sheet(&self, target: &str) -> Vec<String> {
        hints::hint_sheet(target, &self.related_words(target))
    }

    /// Scores `guess` against `target`.
    ///
    /// Precedence: unrecognized (rejected) > exact match > hint word >
    /// no vector (unrelated) > cosine band.
    pub fn score_guess(&self, guess: &str, target: &str) -> GuessOutcome {
        let raw_guess = guess.trim().to_lowercase();
        let raw_target = target.trim().to_lowercase();
        let Some(guess) = self.resolve(guess) else {
            debug!("Rejected guess '{}'", raw_guess);
            return GuessOutcome { score: None, kind: MatchKind::Rejected, feedback: INVALID_FEEDBACK, similarity: None };
        };
        let target = self.normalizer.canonical(target, |w| self.is_recognized(w));

        if guess == target || self.normalizer.spelling_variant(&guess) == Some(target.as_str()) {
            return GuessOutcome {
                score: Some(PERFECT_SCORE),
                kind: MatchKind::Exact,
                feedback: feedback(PERFECT_SCORE),
                similarity: None,
            };
        }

        // Same list the hint sheet was built from, matched as typed or resolved.
        if self.related_words(&raw_target).iter().any(|hint| *hint == raw_guess || *hint == guess) {
            return GuessOutcome {
                score: Some(self.config.scoring.hint_match_score),
                kind: MatchKind::HintWord,
                feedback: HINT_MATCH_FEEDBACK,
                similarity: None,
            };
        }

        let (Some(guess_vec), Some(target_vec)) = (self.store.get(&guess), self.lookup_vector(&target)) else {
            return GuessOutcome {
                score: Some(UNRELATED_SCORE),
                kind: MatchKind::Unrelated,
                feedback: UNRELATED_FEEDBACK,
                similarity: None,
            };
        };

        let similarity = similarity_or_zero(guess_vec, target_vec);
        let score = score_from_similarity(similarity);
        debug!("'{}' vs '{}': similarity {:.3} -> {}", guess, target, similarity, score);
        GuessOutcome { score: Some(score), kind: MatchKind::Similarity, feedback: feedback(score), similarity: Some(similarity) }
    }

    /// Writes the loaded vectors as a `.bin` snapshot for faster startup.
    pub fn save_vectors(&self, path: &Path) -> Result<(), std::io::Error> {
        self.store.save_snapshot(path)
    }

    fn lookup_vector(&self, word: &str) -> Option<&[f32]> {
        self.store
            .get(word)
            .or_else(|| self.normalizer.spelling_variant(word).and_then(|v| self.store.get(v)))
    }
}
