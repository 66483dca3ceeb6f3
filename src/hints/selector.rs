// File: src/hints/selector.rs
use crate::config::HintConfig;
use crate::core::normalizer::WordNormalizer;
use crate::core::similarity::similarity_or_zero;
use crate::core::vectors::VectorStore;
use crate::hints::rules::HintRules;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Picks semantically related words that point toward a target without
/// giving it away.
pub struct HintSelector {
    config: HintConfig,
    rules: HintRules,
    normalizer: WordNormalizer,
    /// target -> related words, kept for the life of the engine
    cache: Mutex<HashMap<String, Vec<String>>>,
}

impl HintSelector {
    pub fn new(config: HintConfig, rules: HintRules) -> Self {
        Self { config, rules, normalizer: WordNormalizer::new(), cache: Mutex::new(HashMap::new()) }
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Common words: bounded length, ASCII letters only.
    pub fn is_common_word(&self, word: &str) -> bool {
        (self.config.min_word_len..=self.config.max_word_len).contains(&word.len())
            && word.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Up to `max_count` related words, most similar first. Never contains
    /// the target, a substring of it, a word containing it, or two words
    /// sharing a stem. Empty when the target has no vector.
    pub fn related_words(&self, target: &str, store: &VectorStore, max_count: usize) -> Vec<String> {
        let Some(target_vec) = store.get(target) else {
            warn!("No vector found for word: {}", target);
            return Vec::new();
        };
        if max_count == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(&str, f64)> = store
            .iter()
            .filter(|(w, _)| *w != target && self.is_common_word(w))
            .map(|(w, v)| (w, similarity_or_zero(v, target_vec)))
            .filter(|(_, sim)| *sim < self.config.similarity_ceiling)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut chosen: Vec<String> = Vec::with_capacity(max_count);
        let mut stems: HashSet<String> = HashSet::new();
        stems.insert(WordNormalizer::stem(target));
        let variant = self.normalizer.spelling_variant(target);

        self.fill(&scored, self.config.similarity_floor, target, variant, max_count, &mut chosen, &mut stems);
        if chosen.len() < max_count {
            debug!("Only {} hints for '{}', widening similarity floor", chosen.len(), target);
            self.fill(&scored, self.config.widened_floor, target, variant, max_count, &mut chosen, &mut stems);
        }

        debug!("Found {} good hints for '{}'", chosen.len(), target);
        chosen
    }

    /// [`related_words`](Self::related_words) with the configured count,
    /// memoized per target. Empty results are not cached.
    pub fn cached_related_words(&self, target: &str, store: &VectorStore) -> Vec<String> {
        if let Some(hit) = self.lock_cache().get(target) {
            return hit.clone();
        }
        let words = self.related_words(target, store, self.config.max_count);
        if !words.is_empty() {
            self.lock_cache().insert(target.to_string(), words.clone());
        }
        words
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[allow(clippy::too_many_arguments)]
    fn fill(
        &self,
        scored: &[(&str, f64)],
        floor: f64,
        target: &str,
        variant: Option<&str>,
        max_count: usize,
        chosen: &mut Vec<String>,
        stems: &mut HashSet<String>,
    ) {
        let pool = scored
            .iter()
            .take_while(|(_, sim)| *sim > floor)
            .filter(|(w, _)| !chosen.iter().any(|c| c.as_str() == *w))
            .take(self.config.candidate_pool)
            .map(|(w, _)| *w)
            .collect::<Vec<_>>();

        for word in pool {
            if chosen.len() >= max_count {
                break;
            }
            if Some(word) == variant || !self.rules.accepts(word, target) {
                continue;
            }
            let stem = WordNormalizer::stem(word);
            if stems.contains(&stem) {
                continue;
            }
            stems.insert(stem);
            chosen.push(word.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Angles give exact, readable similarities against "ocean" at 0 degrees.
    fn at(word: &str, degrees: f64) -> (String, Vec<f32>) {
        let r = degrees.to_radians();
        (word.to_string(), vec![r.cos() as f32, r.sin() as f32])
    }

    fn store() -> VectorStore {
        VectorStore::from_entries(vec![
            at("ocean", 0.0),
            at("oceans", 5.0),  // contains the target, near-identical
            at("sea", 20.0),    // substring-free, very close
            at("water", 30.0),
            at("waters", 31.0), // same stem as water
            at("waves", 35.0),
            at("Pacific", 36.0), // capitalized
            at("beach", 40.0),
            at("coast", 45.0),
            at("shore", 50.0),
            at("island", 55.0),
            at("sand", 66.0),   // 0.41
            at("boat", 70.0),   // 0.34, only after widening
            at("desk", 89.0),   // unrelated
        ])
        .unwrap()
    }

    fn selector() -> HintSelector {
        HintSelector::new(HintConfig::default(), HintRules::standard())
    }

    #[test]
    fn picks_top_related_words_without_leaks() {
        let hints = selector().related_words("ocean", &store(), 5);
        assert_eq!(hints, vec!["sea", "water", "waves", "beach", "coast"]);
    }

    #[test]
    fn widens_floor_once_when_short() {
        let s = store();
        let hints = selector().related_words("ocean", &s, 10);
        // everything above 0.4 that survives, then "boat" from the widened band
        assert_eq!(hints, vec!["sea", "water", "waves", "beach", "coast", "shore", "island", "sand", "boat"]);
        assert!(!hints.contains(&"desk".to_string()));
    }

    #[test]
    fn hint_invariants_hold_for_every_target() {
        let s = store();
        let sel = selector();
        for (target, _) in s.iter() {
            let hints = sel.related_words(target, &s, 5);
            assert!(hints.len() <= 5);
            for h in &hints {
                assert_ne!(h, target);
                assert!(!h.contains(target) && !target.contains(h.as_str()), "{} vs {}", h, target);
            }
            let stems: HashSet<String> = hints.iter().map(|h| WordNormalizer::stem(h)).collect();
            assert_eq!(stems.len(), hints.len());
        }
    }

    #[test]
    fn unknown_target_yields_empty_list() {
        assert!(selector().related_words("zebra", &store(), 5).is_empty());
        assert!(selector().related_words("ocean", &store(), 0).is_empty());
    }

    #[test]
    fn cache_returns_same_list() {
        let s = store();
        let sel = selector();
        let first = sel.cached_related_words("ocean", &s);
        let second = sel.cached_related_words("ocean", &s);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        sel.clear_cache();
        assert_eq!(sel.cached_related_words("ocean", &s), first);
    }
}
