// File: src/core/similarity.rs
use crate::core::types::{EmojiCategory, Feedback};
use crate::error::SimilarityError;
use tracing::debug;

pub const EPSILON: f64 = 1e-10;

/// `(minimum similarity, score)`, highest first. The last band catches everything.
pub const SCORE_BANDS: [(f64, u8); 6] = [
    (0.95, 100),
    (0.70, 90),
    (0.50, 70),
    (0.35, 50),
    (0.20, 30),
    (f64::NEG_INFINITY, 10),
];

/// Feedback keyed by the same scores as [`SCORE_BANDS`].
const FEEDBACK_TABLE: [(u8, Feedback); 6] = [
    (100, Feedback { message: "Perfect match!", color: "#2ecc71", emoji_category: EmojiCategory::Bullseye }),
    (90, Feedback { message: "Extremely close!", color: "#27ae60", emoji_category: EmojiCategory::Fire }),
    (70, Feedback { message: "Very warm!", color: "#f1c40f", emoji_category: EmojiCategory::Sun }),
    (50, Feedback { message: "Getting warmer", color: "#e67e22", emoji_category: EmojiCategory::Star }),
    (30, Feedback { message: "Cold", color: "#3498db", emoji_category: EmojiCategory::Snowflake }),
    (10, Feedback { message: "Ice cold", color: "#2980b9", emoji_category: EmojiCategory::Ice }),
];

pub const HINT_MATCH_FEEDBACK: Feedback = Feedback {
    message: "That's one of the hints! Very close",
    color: "#8e44ad",
    emoji_category: EmojiCategory::HintMatch,
};

pub const UNRELATED_FEEDBACK: Feedback = Feedback {
    message: "Valid word, but not very related",
    color: "#95a5a6",
    emoji_category: EmojiCategory::Unrelated,
};

pub const INVALID_FEEDBACK: Feedback = Feedback {
    message: "Not a valid English word, try again",
    color: "#e74c3c",
    emoji_category: EmojiCategory::Invalid,
};

pub fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x as f64 * y as f64).sum()
}

pub fn vector_magnitude(v: &[f32]) -> f64 {
    v.iter().map(|&x| x as f64 * x as f64).sum::<f64>().sqrt()
}

/// Cosine similarity in `[-1, 1]`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    let mag_a = vector_magnitude(a);
    let mag_b = vector_magnitude(b);
    if mag_a < EPSILON || mag_b < EPSILON {
        return Err(SimilarityError::DegenerateVector);
    }
    Ok((dot_product(a, b) / (mag_a * mag_b)).clamp(-1.0, 1.0))
}

/// Cosine similarity with degenerate vectors treated as unrelated.
pub fn similarity_or_zero(a: &[f32], b: &[f32]) -> f64 {
    cosine_similarity(a, b).unwrap_or_else(|e| {
        debug!("Similarity fallback to 0.0: {}", e);
        0.0
    })
}

/// Maps a similarity onto `{10, 30, 50, 70, 90, 100}`. Non-decreasing in `sim`.
pub fn score_from_similarity(sim: f64) -> u8 {
    SCORE_BANDS
        .iter()
        .find(|(min, _)| sim >= *min)
        .map(|&(_, score)| score)
        .unwrap_or(10)
}

/// Feedback for a score. Scores between bands get the band below them.
pub fn feedback(score: u8) -> Feedback {
    FEEDBACK_TABLE
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|&(_, fb)| fb)
        .unwrap_or(FEEDBACK_TABLE[FEEDBACK_TABLE.len() - 1].1)
}
