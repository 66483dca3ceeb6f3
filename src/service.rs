// File: src/service.rs
//! Request boundary: the four game contracts plus player sessions.
//!
//! Shared state (ledger, leaderboards, player files) lives behind one mutex
//! each. Every update is applied to a copy, persisted, and only then
//! swapped in, so a failed write leaves memory and disk in agreement.

use crate::config::GameConfig;
use crate::core::engine::GameEngine;
use crate::core::types::{DailyAssignment, GuessOutcome};
use crate::daily::{parse_date, DailyWordSelector, WordLedger};
use crate::error::{GameResult, ValidationError};
use crate::leaderboard::{LeaderboardViews, Leaderboards, PlayerStats, ScoreSubmission};
use crate::persistence::{load_json, save_json};
use crate::scoring::{GameSession, ScoringPolicy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

const LEDGER_FILE: &str = "ledger.json";
const LEADERBOARD_FILE: &str = "leaderboards.json";
const PLAYERS_FILE: &str = "players.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetWordResponse {
    pub word: String,
    pub hints: Vec<String>,
    pub date_string: String,
    pub word_number: u32,
}

/// `score: None` means the guess was not a recognized word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResponse {
    pub score: Option<u8>,
    pub message: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl From<GuessOutcome> for ScoreResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            score: outcome.score,
            message: outcome.feedback.message,
            color: outcome.feedback.color,
            emoji: outcome.feedback.emoji_category.emoji(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// Everything kept per player: running stats and finished sessions by date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub stats: PlayerStats,
    pub sessions: BTreeMap<NaiveDate, GameSession>,
}

pub struct GameService {
    engine: GameEngine,
    selector: DailyWordSelector,
    policy: ScoringPolicy,
    data_dir: PathBuf,
    ledger: Mutex<WordLedger>,
    leaderboards: Mutex<Leaderboards>,
    players: Mutex<BTreeMap<String, PlayerRecord>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl GameService {
    /// Opens the persisted state in `data_dir`, starting empty where no file exists yet.
    pub fn open(engine: GameEngine, data_dir: &Path) -> GameResult<Self> {
        let ledger: WordLedger = load_json(&data_dir.join(LEDGER_FILE))?.unwrap_or_default();
        let leaderboards: Leaderboards = load_json(&data_dir.join(LEADERBOARD_FILE))?.unwrap_or_default();
        let players: BTreeMap<String, PlayerRecord> = load_json(&data_dir.join(PLAYERS_FILE))?.unwrap_or_default();
        info!(
            "Opened game state in {}: {} dated words, {} leaderboard entries, {} players",
            data_dir.display(),
            ledger.len(),
            leaderboards.len(),
            players.len()
        );

        let config = engine.config();
        Ok(Self {
            selector: DailyWordSelector::new(&config.daily),
            policy: ScoringPolicy::new(config.scoring.clone()),
            engine,
            data_dir: data_dir.to_path_buf(),
            ledger: Mutex::new(ledger),
            leaderboards: Mutex::new(leaderboards),
            players: Mutex::new(players),
        })
    }

    /// Loads the engine and opens the state directory named in `config`.
    pub fn from_config(config: GameConfig) -> GameResult<Self> {
        let data_dir = config.paths.data_dir.clone();
        let engine = GameEngine::from_config(config)?;
        Self::open(engine, &data_dir)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// The assignment for `date`, created and persisted on first request.
    pub fn assignment(&self, date: NaiveDate) -> GameResult<DailyAssignment> {
        let mut ledger = lock(&self.ledger);
        if let Some(existing) = ledger.get(date) {
            return Ok(existing.clone());
        }
        let mut next = ledger.clone();
        let assignment = self.selector.word_for_date(date, self.engine.targets(), &mut next)?;
        save_json(&next, &self.data_dir.join(LEDGER_FILE))?;
        *ledger = next;
        Ok(assignment)
    }

    /// `target-word(clientLocalDate)`.
    pub fn target_word(&self, date_string: &str) -> GameResult<TargetWordResponse> {
        let date = parse_date(date_string)?;
        let assignment = self.assignment(date)?;
        Ok(TargetWordResponse {
            hints: self.engine.hint_sheet(&assignment.word),
            word: assignment.word,
            date_string: date.format("%Y-%m-%d").to_string(),
            word_number: assignment.sequence_number,
        })
    }

    /// `score(guess, target)`.
    pub fn score(&self, guess: &str, target: &str) -> Result<ScoreResponse, ValidationError> {
        if guess.trim().is_empty() {
            return Err(ValidationError::MissingParameter("guess"));
        }
        if target.trim().is_empty() {
            return Err(ValidationError::MissingParameter("target"));
        }
        Ok(self.engine.score_guess(guess, target).into())
    }

    /// `submit-score{...}`. Invalid submissions are errors; the caller maps
    /// them to `{success: false}`.
    pub fn submit_score(&self, submission: &ScoreSubmission) -> GameResult<SubmitResponse> {
        let mut boards = lock(&self.leaderboards);
        let mut next = boards.clone();
        next.submit(submission)?;
        save_json(&next, &self.data_dir.join(LEADERBOARD_FILE))?;
        *boards = next;
        Ok(SubmitResponse { success: true })
    }

    /// `leaderboards()`.
    pub fn leaderboards(&self) -> LeaderboardViews {
        lock(&self.leaderboards).views(&self.engine.config().leaderboard)
    }

    /// Starts `player`'s game for `date`, or restores it if already finished.
    pub fn start_session(&self, player: &str, date: NaiveDate) -> GameResult<GameSession> {
        if let Some(done) = lock(&self.players).get(player).and_then(|p| p.sessions.get(&date)) {
            info!("Restoring finished session for {} on {}", player, date);
            return Ok(done.clone());
        }
        let assignment = self.assignment(date)?;
        let hints = self.engine.hint_sheet(&assignment.word);
        Ok(GameSession::new(&assignment, hints, &self.policy))
    }

    /// Scores and applies one guess. A rejected word comes back as an
    /// outcome with no score and leaves the session untouched. Finishing
    /// the session archives it and updates the player's stats.
    pub fn play_guess(&self, player: &str, session: &mut GameSession, guess: &str) -> GameResult<GuessOutcome> {
        let outcome = self.engine.score_guess(guess, session.target());
        if outcome.is_rejected() {
            return Ok(outcome);
        }
        session.apply_guess(guess.trim(), &outcome, &self.policy)?;
        if session.is_finished() {
            self.finish_session(player, session)?;
        }
        Ok(outcome)
    }

    pub fn reveal_hint(&self, session: &mut GameSession) -> Result<String, ValidationError> {
        session.reveal_hint().map(str::to_string)
    }

    pub fn player_stats(&self, player: &str) -> PlayerStats {
        lock(&self.players).get(player).map(|p| p.stats.clone()).unwrap_or_else(|| PlayerStats::named(player))
    }

    fn finish_session(&self, player: &str, session: &GameSession) -> GameResult<()> {
        let Some(breakdown) = session.breakdown() else {
            return Ok(());
        };
        let mut players = lock(&self.players);
        let mut next = players.clone();
        let record = next
            .entry(player.to_string())
            .or_insert_with(|| PlayerRecord { stats: PlayerStats::named(player), ..PlayerRecord::default() });
        record.sessions.insert(session.date(), session.clone());
        let counted = record.stats.add_score(session.date(), breakdown.final_score);
        let submission = record.stats.submission(session.date());

        save_json(&next, &self.data_dir.join(PLAYERS_FILE))?;
        *players = next;
        drop(players);

        if !counted {
            warn!("{} already has a score for {}", player, session.date());
        } else if let Some(submission) = submission {
            self.submit_score(&submission)?;
        }
        Ok(())
    }
}
