// src/core/mod.rs
pub mod engine;
pub mod normalizer;
pub mod similarity;
pub mod types;
pub mod vectors;
pub mod vocabulary;
