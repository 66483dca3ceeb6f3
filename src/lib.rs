// src/lib.rs

pub mod config;
pub mod core;
pub mod daily;
pub mod error;
pub mod hints;
pub mod leaderboard;
pub mod persistence;
pub mod scoring;
pub mod service;

pub use crate::config::GameConfig;
pub use crate::core::engine::GameEngine;
pub use crate::error::{GameError, GameResult};
pub use crate::scoring::{GameSession, ScoringPolicy, SessionStatus};
pub use crate::service::GameService;
