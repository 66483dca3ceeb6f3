// File: src/daily.rs
//! Date-seeded choice of the word of the day.
//!
//! The ledger remembers every assignment ever made, tagged with the cycle
//! it was drawn in. Only the current cycle's words are excluded from the
//! next draw, so past dates keep answering with their original word after
//! a reset.

use crate::config::DailyConfig;
use crate::core::types::DailyAssignment;
use crate::core::vocabulary::VocabularyIndex;
use crate::error::{GameError, GameResult, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Used-word ledger: date -> assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLedger {
    cycle: u32,
    assignments: BTreeMap<NaiveDate, DailyAssignment>,
}

impl WordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyAssignment> {
        self.assignments.get(&date)
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Words already drawn in the current cycle.
    pub fn used_words(&self) -> HashSet<&str> {
        self.assignments
            .values()
            .filter(|a| a.cycle == self.cycle)
            .map(|a| a.word.as_str())
            .collect()
    }

    pub fn assignments(&self) -> impl Iterator<Item = &DailyAssignment> {
        self.assignments.values()
    }

    fn start_new_cycle(&mut self) {
        self.cycle += 1;
    }

    fn record(&mut self, assignment: DailyAssignment) {
        self.assignments.insert(assignment.date, assignment);
    }
}

/// splitmix64 finalizer. Stable across platforms and releases.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// `YYYYMMDD` as a number.
pub fn date_number(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + date.month() as u64 * 100 + date.day() as u64
}

/// Deterministic value in `[0, 1)` for a date.
pub fn date_seed(date: NaiveDate) -> f64 {
    (splitmix64(date_number(date)) >> 11) as f64 / (1u64 << 53) as f64
}

/// Parses a client-supplied `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingParameter("date"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone)]
pub struct DailyWordSelector {
    epoch: NaiveDate,
    reset_margin: usize,
}

impl DailyWordSelector {
    pub fn new(config: &DailyConfig) -> Self {
        Self { epoch: config.epoch, reset_margin: config.reset_margin }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Word number shown to players; the epoch itself is #1.
    pub fn sequence_number(&self, date: NaiveDate) -> Result<u32, ValidationError> {
        let days = (date - self.epoch).num_days();
        if days < 0 {
            return Err(ValidationError::DateBeforeEpoch(date));
        }
        u32::try_from(days + 1).map_err(|_| ValidationError::InvalidDate(date.to_string()))
    }

    /// The word for `date`, recorded in `ledger` on first request.
    /// Asking again for a recorded date returns the stored assignment untouched.
    pub fn word_for_date(
        &self,
        date: NaiveDate,
        vocabulary: &VocabularyIndex,
        ledger: &mut WordLedger,
    ) -> GameResult<DailyAssignment> {
        if let Some(existing) = ledger.get(date) {
            debug!("Ledger hit for {}: #{}", date, existing.sequence_number);
            return Ok(existing.clone());
        }
        let sequence_number = self.sequence_number(date)?;
        if vocabulary.is_empty() {
            return Err(GameError::Configuration("target vocabulary is empty".into()));
        }

        // a margin as large as the pool would reset before every draw
        let margin = if self.reset_margin >= vocabulary.len() { 1 } else { self.reset_margin.max(1) };

        let mut unused = self.unused_words(vocabulary, ledger);
        if unused.len() < margin {
            warn!(
                "Only {} unused target words left in cycle {}, starting cycle {}",
                unused.len(),
                ledger.cycle(),
                ledger.cycle() + 1
            );
            ledger.start_new_cycle();
            unused = self.unused_words(vocabulary, ledger);
        }

        let index = ((date_seed(date) * unused.len() as f64) as usize).min(unused.len() - 1);
        let assignment = DailyAssignment {
            date,
            word: unused[index].clone(),
            sequence_number,
            cycle: ledger.cycle(),
        };
        info!("Assigned word #{} for {} ({} unused before draw)", sequence_number, date, unused.len());
        ledger.record(assignment.clone());
        Ok(assignment)
    }

    fn unused_words(&self, vocabulary: &VocabularyIndex, ledger: &WordLedger) -> Vec<String> {
        let used = ledger.used_words();
        vocabulary.words().iter().filter(|w| !used.contains(w.as_str())).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vectors::VectorStore;

    fn vocabulary(words: &[&str]) -> VocabularyIndex {
        let store = VectorStore::from_entries(
            words.iter().enumerate().map(|(i, w)| (w.to_string(), vec![1.0, i as f32])),
        )
        .unwrap();
        VocabularyIndex::from_words(words.iter().copied(), &store).unwrap()
    }

    fn selector(reset_margin: usize) -> DailyWordSelector {
        DailyWordSelector::new(&DailyConfig { reset_margin, ..DailyConfig::default() })
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_date_returns_same_word_without_new_entry() {
        let vocab = vocabulary(&["ocean", "river", "forest", "desert", "valley"]);
        let sel = selector(50);
        let mut ledger = WordLedger::new();

        let first = sel.word_for_date(day(2024, 3, 15), &vocab, &mut ledger).unwrap();
        let snapshot = ledger.clone();
        let second = sel.word_for_date(day(2024, 3, 15), &vocab, &mut ledger).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger, snapshot);
        assert_eq!(ledger.len(), 1);
        assert_eq!(first.sequence_number, 75);
    }

    #[test]
    fn selection_is_stable_across_fresh_ledgers() {
        let vocab = vocabulary(&["ocean", "river", "forest", "desert", "valley"]);
        let a = selector(50).word_for_date(day(2024, 6, 1), &vocab, &mut WordLedger::new()).unwrap();
        let b = selector(50).word_for_date(day(2024, 6, 1), &vocab, &mut WordLedger::new()).unwrap();
        assert_eq!(a.word, b.word);
    }

    #[test]
    fn no_repeats_until_the_pool_is_exhausted() {
        let words = ["apple", "beach", "cloud", "dream", "earth", "flame", "grape"];
        let vocab = vocabulary(&words);
        let sel = selector(50);
        let mut ledger = WordLedger::new();

        let start = day(2024, 1, 1);
        let mut seen = HashSet::new();
        for offset in 0..words.len() as i64 {
            let date = start + chrono::Duration::days(offset);
            let assignment = sel.word_for_date(date, &vocab, &mut ledger).unwrap();
            assert!(seen.insert(assignment.word.clone()), "{} repeated", assignment.word);
            assert_eq!(assignment.cycle, 0);
        }
        assert_eq!(seen.len(), words.len());

        // the next day starts a new cycle, and old dates still answer the same
        let next = sel.word_for_date(start + chrono::Duration::days(7), &vocab, &mut ledger).unwrap();
        assert_eq!(next.cycle, 1);
        assert_eq!(ledger.cycle(), 1);
        let replay = sel.word_for_date(start, &vocab, &mut ledger).unwrap();
        assert_eq!(replay.cycle, 0);
    }

    #[test]
    fn resets_once_fewer_than_margin_remain() {
        let vocab = vocabulary(&["apple", "beach", "cloud", "dream", "earth"]);
        let sel = selector(3);
        let mut ledger = WordLedger::new();
        let start = day(2024, 2, 1);
        for offset in 0..3 {
            sel.word_for_date(start + chrono::Duration::days(offset), &vocab, &mut ledger).unwrap();
        }
        assert_eq!(ledger.cycle(), 0);
        // 2 unused < 3
        sel.word_for_date(start + chrono::Duration::days(3), &vocab, &mut ledger).unwrap();
        assert_eq!(ledger.cycle(), 1);
        assert_eq!(ledger.used_words().len(), 1);
    }

    #[test]
    fn dates_before_epoch_are_rejected() {
        let vocab = vocabulary(&["ocean"]);
        let err = selector(50).word_for_date(day(2023, 12, 31), &vocab, &mut WordLedger::new()).unwrap_err();
        assert!(matches!(err, GameError::Validation(ValidationError::DateBeforeEpoch(_))));
    }

    #[test]
    fn epoch_is_word_one() {
        assert_eq!(selector(50).sequence_number(day(2024, 1, 1)), Ok(1));
        assert_eq!(selector(50).sequence_number(day(2024, 1, 31)), Ok(31));
    }

    #[test]
    fn parses_client_dates() {
        assert_eq!(parse_date(" 2024-05-09 "), Ok(day(2024, 5, 9)));
        assert_eq!(parse_date(""), Err(ValidationError::MissingParameter("date")));
        assert!(matches!(parse_date("09/05/2024"), Err(ValidationError::InvalidDate(_))));
    }

    #[test]
    fn seed_is_in_unit_interval() {
        for offset in 0..400 {
            let s = date_seed(day(2024, 1, 1) + chrono::Duration::days(offset));
            assert!((0.0..1.0).contains(&s));
        }
        assert_eq!(date_number(day(2024, 3, 7)), 20240307);
    }
}
