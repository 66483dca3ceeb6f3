//! Game configuration
//!
//! Every field has a default so an empty or missing TOML file yields a
//! playable game. Policy tables are checked by [`GameConfig::validate`]
//! before the engine starts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub paths: PathsConfig,
    pub hints: HintConfig,
    pub scoring: ScoringConfig,
    pub daily: DailyConfig,
    pub leaderboard: LeaderboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Vector table: `.json` object, GloVe text, or `.bin` snapshot
    pub vectors: PathBuf,

    /// Curated daily target words (`{"words": [...]}` or a bare array)
    pub targets: PathBuf,

    /// Optional plain word list of additionally recognized guesses
    pub dictionary: Option<PathBuf>,

    /// Directory for the ledger, leaderboards and player files
    pub data_dir: PathBuf,

    /// Attempts at loading the vector table when the file is unreadable
    pub load_attempts: u32,

    pub load_backoff_ms: u64,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            vectors: PathBuf::from("data/vectors.json"),
            targets: PathBuf::from("data/daily-words.json"),
            dictionary: None,
            data_dir: PathBuf::from("data/state"),
            load_attempts: 3,
            load_backoff_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Number of related words shown in the first hint
    pub max_count: usize,

    /// Related-but-not-synonymous similarity band `[floor, ceiling)`
    pub similarity_floor: f64,
    pub similarity_ceiling: f64,

    /// Floor used for the single widened retry
    pub widened_floor: f64,

    /// Candidates kept from the band before filtering
    pub candidate_pool: usize,

    /// Length bounds of the common-word vocabulary
    pub min_word_len: usize,
    pub max_word_len: usize,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            max_count: 5,
            similarity_floor: 0.4,
            similarity_ceiling: 0.95,
            widened_floor: 0.3,
            candidate_pool: 20,
            min_word_len: 3,
            max_word_len: 8,
        }
    }
}

/// A step of the points table: guesses scoring at least `min_score` earn `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBand {
    pub min_score: u8,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub max_guesses: u32,

    /// Points for non-perfect guesses, highest band first
    pub point_bands: Vec<PointBand>,

    /// A perfect guess never earns less than this
    pub minimum_perfect_award: u32,

    /// Ceiling indexed by paid hints revealed; the last entry repeats
    pub ceilings: Vec<u32>,

    pub ceiling_floor: u32,

    /// Lowers the ceiling for every guess already used. Zero disables it.
    pub ceiling_decay_per_guess: u32,

    /// Final-score deduction per paid hint, in reveal order
    pub hint_penalties: Vec<u32>,

    /// Score given to a guess that is one of the target's hint words
    pub hint_match_score: u8,

    /// Match score that keeps the warm streak going
    pub warm_streak_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_guesses: 3,
            point_bands: vec![
                PointBand { min_score: 90, points: 100 },
                PointBand { min_score: 70, points: 50 },
                PointBand { min_score: 50, points: 25 },
                PointBand { min_score: 0, points: 10 },
            ],
            minimum_perfect_award: 250,
            ceilings: vec![1000, 750, 500],
            ceiling_floor: 300,
            ceiling_decay_per_guess: 0,
            hint_penalties: vec![0, 150],
            hint_match_score: 90,
            warm_streak_score: 70,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    /// Date of word #1
    pub epoch: NaiveDate,

    /// Start a new cycle once fewer unused words than this remain
    pub reset_margin: usize,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            reset_margin: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub min_games_for_hall_of_fame: u32,
    pub view_size: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self { min_games_for_hall_of_fame: 5, view_size: 10 }
    }
}

impl GameConfig {
    /// Reads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> GameResult<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| {
                GameError::Configuration(format!("{}: {}", path.display(), e))
            })?
        } else {
            info!("Config file {} not found, using defaults", path.display());
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        let bad = |msg: String| Err(GameError::Configuration(msg));
        let s = &self.scoring;

        if s.max_guesses == 0 {
            return bad("scoring.max_guesses must be at least 1".into());
        }
        if s.point_bands.is_empty() {
            return bad("scoring.point_bands is empty".into());
        }
        for pair in s.point_bands.windows(2) {
            if pair[0].min_score <= pair[1].min_score || pair[0].points < pair[1].points {
                return bad("scoring.point_bands must be ordered by descending score with non-increasing points".into());
            }
        }
        if s.point_bands.iter().any(|b| b.min_score >= 100) {
            return bad("scoring.point_bands may not cover a perfect score".into());
        }
        if s.point_bands.iter().any(|b| b.points >= s.minimum_perfect_award) {
            return bad("scoring.minimum_perfect_award must exceed every point band".into());
        }
        if s.ceilings.is_empty() || s.ceilings.windows(2).any(|w| w[0] < w[1]) {
            return bad("scoring.ceilings must be non-empty and non-increasing".into());
        }
        if s.hint_penalties.windows(2).any(|w| w[0] > w[1]) {
            return bad("scoring.hint_penalties must be non-decreasing".into());
        }
        if s.hint_match_score >= 100 {
            return bad("scoring.hint_match_score must stay below a perfect score".into());
        }

        let h = &self.hints;
        if !(h.widened_floor <= h.similarity_floor && h.similarity_floor < h.similarity_ceiling) {
            return bad("hints: expected widened_floor <= similarity_floor < similarity_ceiling".into());
        }
        if h.min_word_len == 0 || h.min_word_len > h.max_word_len {
            return bad("hints: invalid common-word length bounds".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: GameConfig = toml::from_str(
            r#"
            [scoring]
            max_guesses = 5

            [daily]
            epoch = "2025-03-01"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.scoring.max_guesses, 5);
        assert_eq!(cfg.scoring.ceilings, vec![1000, 750, 500]);
        assert_eq!(cfg.daily.epoch, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(cfg.hints.max_count, 5);
    }

    #[test]
    fn rejects_non_monotonic_points() {
        let mut cfg = GameConfig::default();
        cfg.scoring.point_bands = vec![
            PointBand { min_score: 90, points: 10 },
            PointBand { min_score: 50, points: 25 },
        ];
        assert!(matches!(cfg.validate(), Err(GameError::Configuration(_))));
    }

    #[test]
    fn rejects_perfect_award_below_a_band() {
        let mut cfg = GameConfig::default();
        cfg.scoring.minimum_perfect_award = 100;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_rising_ceiling_and_bonus_penalties() {
        let mut cfg = GameConfig::default();
        cfg.scoring.ceilings = vec![750, 1000];
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.scoring.hint_penalties = vec![200, 100];
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.scoring.max_guesses, 3);
    }
}
