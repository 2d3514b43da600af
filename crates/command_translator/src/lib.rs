//! command_translator: natural-language to JSON command translation
//!
//! This library provides:
//! - Settings file and credential loading
//! - A few-shot prompt template with a single input slot
//! - A `CompletionBackend` abstraction with an OpenAI-compatible client
//! - The translation pipeline with a fixed fallback on failure
//! - The interactive read-translate-print loop
//!
//! The model's reply is returned as-is. Nothing checks that it is valid JSON.
//!
//! # Example
//!
//! ```no_run
//! use command_translator::{require_api_key, CommandTranslator, ModelClient, ModelConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let api_key = require_api_key().unwrap();
//!     let client = ModelClient::new(ModelConfig::default().with_api_key(api_key));
//!     let translator = CommandTranslator::new(client);
//!
//!     let command = translator.translate("turn off the kitchen lights").await;
//!     println!("{}", command);
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod model;
pub mod prompt;
pub mod repl;
pub mod translator;

// Re-export commonly used types and functions
pub use error::{Result, TranslatorError};

// Config re-exports
pub use config::{
    load_settings_file, require_api_key, require_var, API_KEY_ENV, BASE_URL_ENV, MODEL_ENV,
};

// Model re-exports
pub use model::{CompletionBackend, ModelClient, ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

// Prompt re-exports
pub use prompt::{PromptTemplate, COMMAND_PROMPT, USER_INPUT_VAR};

// Pipeline re-exports
pub use repl::{is_exit_sentinel, run_interactive, LoopExit, LoopSummary, EXIT_SENTINEL};
pub use translator::{CommandTranslator, FALLBACK_RESPONSE};
