//! Gemini REST client for palette text and mood images
//!
//! Both calls are one-shot request/response exchanges against
//! `models/{model}:generateContent`. Palette replies are constrained by a
//! response schema and then validated strictly before they become drafts.

pub mod client;
pub mod error;
pub mod models;
pub mod prompt;

pub use client::GeminiClient;
pub use error::GenerateError;
