// File: src/leaderboard.rs
use crate::config::LeaderboardConfig;
use crate::daily::parse_date;
use crate::error::ValidationError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Body of a score submission. Totals are the player's running stats,
/// not one game's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub name: String,
    pub score: u64,
    pub games_played: u32,
    pub average_score: f64,
    pub date_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_score: u64,
    pub average_score: f64,
    pub games_played: u32,
    /// Player's calendar date of the submission
    pub date: NaiveDate,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardViews {
    pub monthly: Vec<LeaderboardEntry>,
    pub hall_of_fame: Vec<LeaderboardEntry>,
}

/// Latest entry per player. Both views are derived on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboards {
    entries: HashMap<String, LeaderboardEntry>,
}

impl Leaderboards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn submit(&mut self, submission: &ScoreSubmission) -> Result<&LeaderboardEntry, ValidationError> {
        self.submit_at(submission, Utc::now())
    }

    /// Replaces the player's entry. Names are trimmed; an empty name or
    /// date is rejected.
    pub fn submit_at(
        &mut self,
        submission: &ScoreSubmission,
        now: DateTime<Utc>,
    ) -> Result<&LeaderboardEntry, ValidationError> {
        let name = submission.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingParameter("name"));
        }
        let date = parse_date(&submission.date_string)?;
        let average_score = if submission.average_score.is_finite() { submission.average_score.max(0.0) } else { 0.0 };

        let entry = LeaderboardEntry {
            name: name.to_string(),
            total_score: submission.score,
            average_score,
            games_played: submission.games_played,
            date,
            last_updated: now,
        };
        info!("Score submitted for {}: total {} over {} games", entry.name, entry.total_score, entry.games_played);
        Ok(match self.entries.entry(entry.name.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        })
    }

    /// Entries dated in the same month as the newest submission, by total score.
    pub fn monthly(&self, config: &LeaderboardConfig) -> Vec<LeaderboardEntry> {
        let Some(newest) = self.entries.values().map(|e| e.date).max() else {
            return Vec::new();
        };
        let mut view: Vec<LeaderboardEntry> = self
            .entries
            .values()
            .filter(|e| e.date.year() == newest.year() && e.date.month() == newest.month())
            .cloned()
            .collect();
        view.sort_by(|a, b| b.total_score.cmp(&a.total_score).then_with(|| a.name.cmp(&b.name)));
        view.truncate(config.view_size);
        view
    }

    /// All-time view for players with enough games, by average score.
    pub fn hall_of_fame(&self, config: &LeaderboardConfig) -> Vec<LeaderboardEntry> {
        let mut view: Vec<LeaderboardEntry> = self
            .entries
            .values()
            .filter(|e| e.games_played >= config.min_games_for_hall_of_fame)
            .cloned()
            .collect();
        view.sort_by(|a, b| {
            b.average_score
                .partial_cmp(&a.average_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        view.truncate(config.view_size);
        view
    }

    pub fn views(&self, config: &LeaderboardConfig) -> LeaderboardViews {
        LeaderboardViews { monthly: self.monthly(config), hall_of_fame: self.hall_of_fame(config) }
    }
}

/// A player's running totals, one score per calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_name: Option<String>,
    pub total_score: u64,
    pub games_played: u32,
    pub average_score: f64,
    /// Best single-game final score
    #[serde(default)]
    pub high_score: u32,
    pub daily_scores: BTreeMap<NaiveDate, u32>,
}

impl PlayerStats {
    pub fn named(name: &str) -> Self {
        Self { player_name: Some(name.to_string()), ..Self::default() }
    }

    /// Records a finished game. Returns `false` if `date` was already counted.
    pub fn add_score(&mut self, date: NaiveDate, score: u32) -> bool {
        if self.daily_scores.contains_key(&date) {
            debug!("Score for {} already recorded", date);
            return false;
        }
        self.daily_scores.insert(date, score);
        self.total_score += u64::from(score);
        self.games_played += 1;
        self.average_score = (self.total_score as f64 / f64::from(self.games_played)).round();
        self.high_score = self.high_score.max(score);
        true
    }

    /// Submission carrying these totals, or `None` without a player name.
    pub fn submission(&self, date: NaiveDate) -> Option<ScoreSubmission> {
        let name = self.player_name.as_ref()?;
        Some(ScoreSubmission {
            name: name.clone(),
            score: self.total_score,
            games_played: self.games_played,
            average_score: self.average_score,
            date_string: date.format("%Y-%m-%d").to_string(),
        })
    }
}
