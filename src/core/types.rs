// src/core/types.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An embedding. Every vector in a store has the same length.
pub type WordVector = Vec<f32>;

/// One word-of-the-day as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAssignment {
    pub date: NaiveDate,
    pub word: String,
    /// Days since the epoch, starting at 1.
    pub sequence_number: u32,
    /// Ledger cycle this word was drawn in.
    pub cycle: u32,
}

/// One submitted guess. `match_score` is `None` only for rejected words,
/// which never enter a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    pub word: String,
    pub match_score: Option<u8>,
    pub points_awarded: u32,
    pub hint_word: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScoreState {
    pub base_score: u32,
    /// Paid hints only; the related-words hint is always free.
    pub hints_revealed: u32,
    pub guesses_used: u32,
    pub guesses_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: u32,
    /// Never positive.
    pub hints_deduction: i64,
    pub final_score: u32,
}

/// Icon shown next to a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiCategory {
    Bullseye,
    Fire,
    Sun,
    Star,
    Snowflake,
    Ice,
    HintMatch,
    Unrelated,
    Invalid,
}

impl EmojiCategory {
    pub fn emoji(self) -> &'static str {
        match self {
            EmojiCategory::Bullseye => "🎯",
            EmojiCategory::Fire => "🔥",
            EmojiCategory::Sun => "☀️",
            EmojiCategory::Star => "⭐",
            EmojiCategory::Snowflake => "❄️",
            EmojiCategory::Ice => "🧊",
            EmojiCategory::HintMatch => "💡",
            EmojiCategory::Unrelated => "🤔",
            EmojiCategory::Invalid => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub message: &'static str,
    /// CSS hex colour
    pub color: &'static str,
    pub emoji_category: EmojiCategory,
}

/// How a guess was scored against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    HintWord,
    Similarity,
    /// Recognized word without a vector
    Unrelated,
    Rejected,
}

/// Result of scoring one guess. `score` is `None` when the guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessOutcome {
    pub score: Option<u8>,
    pub kind: MatchKind,
    pub feedback: Feedback,
    /// Raw cosine similarity when one was computed
    pub similarity: Option<f64>,
}

impl GuessOutcome {
    pub fn is_rejected(&self) -> bool {
        self.score.is_none()
    }
}
