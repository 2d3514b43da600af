//! Model client module for text completion
//!
//! This module provides:
//! - `client`: The `CompletionBackend` trait and its OpenAI-compatible implementation

mod client;

pub use client::{CompletionBackend, ModelClient, ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
