// File: src/scoring.rs
//! Points, ceilings and the per-day session state machine.

use crate::config::ScoringConfig;
use crate::core::types::{DailyAssignment, GuessOutcome, GuessRecord, MatchKind, ScoreBreakdown, SessionScoreState};
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const PERFECT_SCORE: u8 = 100;

/// Turns match scores and hint usage into points. Stateless; all numbers
/// come from [`ScoringConfig`].
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    config: ScoringConfig,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringPolicy {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn max_guesses(&self) -> u32 {
        self.config.max_guesses
    }

    /// Points for a non-perfect match score.
    pub fn points_for(&self, match_score: u8) -> u32 {
        self.config
            .point_bands
            .iter()
            .find(|band| match_score >= band.min_score)
            .map_or(0, |band| band.points)
    }

    /// Most a perfect guess can still bring the session total to.
    pub fn ceiling(&self, hints_revealed: u32, guesses_used: u32) -> u32 {
        let ceilings = &self.config.ceilings;
        let by_hints = ceilings
            .get(hints_revealed as usize)
            .or_else(|| ceilings.last())
            .copied()
            .unwrap_or(self.config.ceiling_floor);
        let decay = self.config.ceiling_decay_per_guess.saturating_mul(guesses_used);
        by_hints.saturating_sub(decay).max(self.config.ceiling_floor)
    }

    pub fn perfect_award(&self, state: &SessionScoreState) -> u32 {
        let ceiling = self.ceiling(state.hints_revealed, state.guesses_used);
        ceiling.saturating_sub(state.base_score).max(self.config.minimum_perfect_award)
    }

    /// Points for one accepted guess given the state before it.
    pub fn award(&self, match_score: u8, state: &SessionScoreState) -> u32 {
        if match_score >= PERFECT_SCORE {
            self.perfect_award(state)
        } else {
            self.points_for(match_score)
        }
    }

    /// Sum of per-hint penalties, as a non-positive number. Hints past the
    /// end of the table cost the last entry again.
    pub fn hints_deduction(&self, hints_revealed: u32) -> i64 {
        let penalties = &self.config.hint_penalties;
        let total: i64 = (0..hints_revealed as usize)
            .map(|i| penalties.get(i).or_else(|| penalties.last()).copied().unwrap_or(0) as i64)
            .sum();
        -total
    }

    pub fn breakdown(&self, state: &SessionScoreState) -> ScoreBreakdown {
        let hints_deduction = self.hints_deduction(state.hints_revealed);
        let final_score = (state.base_score as i64 + hints_deduction).max(0);
        ScoreBreakdown {
            base_score: state.base_score,
            hints_deduction,
            final_score: u32::try_from(final_score).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// One player's game for one date.
///
/// `hints[0]` is always visible; each reveal uncovers the next one and is
/// counted as a paid hint. Once `Won` or `Lost` the session is frozen and
/// every mutation fails with [`ValidationError::SessionFinished`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    date: NaiveDate,
    target: String,
    sequence_number: u32,
    hints: Vec<String>,
    state: SessionScoreState,
    guesses: Vec<GuessRecord>,
    status: SessionStatus,
    warm_streak: u32,
    best_warm_streak: u32,
    breakdown: Option<ScoreBreakdown>,
}

impl GameSession {
    pub fn new(assignment: &DailyAssignment, hints: Vec<String>, policy: &ScoringPolicy) -> Self {
        Self {
            date: assignment.date,
            target: assignment.word.clone(),
            sequence_number: assignment.sequence_number,
            hints,
            state: SessionScoreState { guesses_remaining: policy.max_guesses(), ..SessionScoreState::default() },
            guesses: Vec::new(),
            status: SessionStatus::InProgress,
            warm_streak: 0,
            best_warm_streak: 0,
            breakdown: None,
        }
    }

    /// Applies a scored guess. A rejected guess changes nothing and costs
    /// no attempt.
    pub fn apply_guess(
        &mut self,
        guess: &str,
        outcome: &GuessOutcome,
        policy: &ScoringPolicy,
    ) -> Result<GuessRecord, ValidationError> {
        self.ensure_in_progress()?;
        let Some(match_score) = outcome.score else {
            return Err(ValidationError::UnknownWord(guess.to_string()));
        };

        // computed against the state before this guess, then committed at once
        let points = policy.award(match_score, &self.state);
        let record = GuessRecord {
            word: guess.to_string(),
            match_score: Some(match_score),
            points_awarded: points,
            hint_word: outcome.kind == MatchKind::HintWord,
        };

        self.state.base_score += points;
        self.state.guesses_used += 1;
        self.state.guesses_remaining = self.state.guesses_remaining.saturating_sub(1);
        self.guesses.push(record.clone());

        if match_score >= policy.config().warm_streak_score {
            self.warm_streak += 1;
            self.best_warm_streak = self.best_warm_streak.max(self.warm_streak);
        } else {
            self.warm_streak = 0;
        }

        if match_score >= PERFECT_SCORE {
            self.finish(SessionStatus::Won, policy);
        } else if self.state.guesses_remaining == 0 {
            self.finish(SessionStatus::Lost, policy);
        }
        debug!(
            "Guess '{}' scored {} for {} points ({} left)",
            guess, match_score, points, self.state.guesses_remaining
        );
        Ok(record)
    }

    /// Uncovers the next paid hint. Irreversible.
    pub fn reveal_hint(&mut self) -> Result<&str, ValidationError> {
        self.ensure_in_progress()?;
        let next = 1 + self.state.hints_revealed as usize;
        if next >= self.hints.len() {
            return Err(ValidationError::NoHintsLeft);
        }
        self.state.hints_revealed += 1;
        Ok(&self.hints[next])
    }

    pub fn visible_hints(&self) -> &[String] {
        let shown = (1 + self.state.hints_revealed as usize).min(self.hints.len());
        &self.hints[..shown]
    }

    pub fn hints_left(&self) -> usize {
        self.hints.len().saturating_sub(1 + self.state.hints_revealed as usize)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub fn state(&self) -> &SessionScoreState {
        &self.state
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    pub fn warm_streak(&self) -> u32 {
        self.warm_streak
    }

    pub fn best_warm_streak(&self) -> u32 {
        self.best_warm_streak
    }

    /// Frozen final breakdown; `None` while the session is still running.
    pub fn breakdown(&self) -> Option<ScoreBreakdown> {
        self.breakdown
    }

    /// Spoiler-free summary for sharing.
    pub fn share_text(&self, policy: &ScoringPolicy) -> String {
        let used = self.state.guesses_used as usize;
        let total = policy.max_guesses() as usize;
        let guesses: String = (0..total).map(|i| if i < used { "🟦" } else { "⬜" }).collect();

        let paid = self.hints.len().saturating_sub(1);
        let revealed = self.state.hints_revealed as usize;
        let hints: String = (0..paid).map(|i| if i < revealed { "💡" } else { "⬜" }).collect();

        let score = self.breakdown.unwrap_or_else(|| policy.breakdown(&self.state)).final_score;
        format!(
            "Word Master #{}  {}\nScore: {}\n\nGuesses: {}\nHints: {}",
            self.sequence_number,
            self.date.format("%Y-%m-%d"),
            score,
            guesses,
            hints
        )
    }

    fn finish(&mut self, status: SessionStatus, policy: &ScoringPolicy) {
        self.status = status;
        self.breakdown = Some(policy.breakdown(&self.state));
    }

    fn ensure_in_progress(&self) -> Result<(), ValidationError> {
        if self.is_finished() {
            Err(ValidationError::SessionFinished(self.date))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::similarity::feedback;

    fn outcome(score: u8) -> GuessOutcome {
        GuessOutcome { score: Some(score), kind: MatchKind::Similarity, feedback: feedback(score), similarity: None }
    }

    fn session(policy: &ScoringPolicy) -> GameSession {
        let assignment = DailyAssignment {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            word: "ocean".into(),
            sequence_number: 75,
            cycle: 0,
        };
        let hints = vec!["related".to_string(), "category".to_string(), "shape".to_string()];
        GameSession::new(&assignment, hints, policy)
    }

    #[test]
    fn points_are_monotonic_and_perfect_beats_all() {
        let policy = ScoringPolicy::default();
        let scores = [10u8, 30, 50, 70, 90];
        let points: Vec<u32> = scores.iter().map(|&s| policy.points_for(s)).collect();
        assert_eq!(points, vec![10, 10, 25, 50, 100]);
        assert!(points.windows(2).all(|w| w[0] <= w[1]));
        assert!(policy.perfect_award(&SessionScoreState { base_score: 10_000, ..Default::default() }) > 100);
    }

    #[test]
    fn ceiling_follows_paid_hints_with_floor() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.ceiling(0, 0), 1000);
        assert_eq!(policy.ceiling(1, 0), 750);
        assert_eq!(policy.ceiling(2, 0), 500);
        assert_eq!(policy.ceiling(7, 0), 500);

        let decaying = ScoringPolicy::new(ScoringConfig { ceiling_decay_per_guess: 150, ..ScoringConfig::default() });
        assert_eq!(decaying.ceiling(0, 2), 700);
        assert_eq!(decaying.ceiling(2, 2), 300);
    }

    #[test]
    fn deductions_start_at_second_paid_hint() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.hints_deduction(0), 0);
        assert_eq!(policy.hints_deduction(1), 0);
        assert_eq!(policy.hints_deduction(2), -150);
        assert_eq!(policy.hints_deduction(3), -300);
    }

    #[test]
    fn near_miss_then_perfect_fills_to_ceiling() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        assert_eq!(s.apply_guess("sand", &outcome(50), &policy).unwrap().points_awarded, 25);
        assert_eq!(s.apply_guess("sea", &outcome(100), &policy).unwrap().points_awarded, 975);
        assert_eq!(s.status(), SessionStatus::Won);
        assert_eq!(s.state().guesses_used, 2);
        assert_eq!(s.breakdown().unwrap().final_score, 1000);
    }

    #[test]
    fn one_paid_hint_caps_at_750() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        assert_eq!(s.reveal_hint().unwrap(), "category");
        s.apply_guess("ocean", &outcome(100), &policy).unwrap();
        let b = s.breakdown().unwrap();
        assert_eq!((b.base_score, b.hints_deduction, b.final_score), (750, 0, 750));
    }

    #[test]
    fn perfect_award_never_below_minimum() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        s.reveal_hint().unwrap();
        s.reveal_hint().unwrap();
        s.apply_guess("a", &outcome(90), &policy).unwrap();
        s.apply_guess("b", &outcome(90), &policy).unwrap();
        // ceiling 500, accumulated 200 -> 300; then a session with more points
        assert_eq!(s.apply_guess("c", &outcome(100), &policy).unwrap().points_awarded, 300);
        assert_eq!(s.breakdown().unwrap().final_score, 500 - 150);

        let rich = SessionScoreState { base_score: 900, hints_revealed: 0, guesses_used: 2, guesses_remaining: 1 };
        assert_eq!(policy.perfect_award(&rich), 250);
    }

    #[test]
    fn rejected_guess_costs_nothing() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        let rejected = GuessOutcome {
            score: None,
            kind: MatchKind::Rejected,
            feedback: crate::core::similarity::INVALID_FEEDBACK,
            similarity: None,
        };
        let before = s.clone();
        assert_eq!(s.apply_guess("xyzzy", &rejected, &policy), Err(ValidationError::UnknownWord("xyzzy".into())));
        assert_eq!(s, before);
    }

    #[test]
    fn runs_out_of_guesses_and_freezes() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        for word in ["a", "b", "c"] {
            s.apply_guess(word, &outcome(30), &policy).unwrap();
        }
        assert_eq!(s.status(), SessionStatus::Lost);
        assert_eq!(s.breakdown().unwrap().final_score, 30);
        assert!(matches!(s.apply_guess("d", &outcome(100), &policy), Err(ValidationError::SessionFinished(_))));
        assert!(matches!(s.reveal_hint(), Err(ValidationError::SessionFinished(_))));
        assert_eq!(s.guesses().len(), 3);
    }

    #[test]
    fn hints_run_out() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        assert_eq!(s.visible_hints().len(), 1);
        s.reveal_hint().unwrap();
        s.reveal_hint().unwrap();
        assert_eq!(s.hints_left(), 0);
        assert_eq!(s.reveal_hint(), Err(ValidationError::NoHintsLeft));
        assert_eq!(s.state().hints_revealed, 2);
        assert_eq!(s.visible_hints().len(), 3);
    }

    #[test]
    fn warm_streak_tracks_consecutive_close_guesses() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        s.apply_guess("a", &outcome(70), &policy).unwrap();
        s.apply_guess("b", &outcome(90), &policy).unwrap();
        assert_eq!(s.warm_streak(), 2);
        s.apply_guess("c", &outcome(10), &policy).unwrap();
        assert_eq!(s.warm_streak(), 0);
        assert_eq!(s.best_warm_streak(), 2);
    }

    #[test]
    fn share_text_hides_the_word() {
        let policy = ScoringPolicy::default();
        let mut s = session(&policy);
        s.reveal_hint().unwrap();
        s.apply_guess("sea", &outcome(100), &policy).unwrap();
        let text = s.share_text(&policy);
        assert_eq!(text, "Word Master #75  2024-03-15\nScore: 750\n\nGuesses: 🟦⬜⬜\nHints: 💡⬜");
        assert!(!text.contains("ocean"));
    }
}
