//! All model-backed generation functionality

pub mod client;

// Re-export main types for convenience
pub use client::{BedrockSummarizer, DEFAULT_MODEL_ID, Summarizer, build_prompt};
