//! Configuration module for command_translator
//!
//! This module contains:
//! - `settings`: Loading a dotenv-style settings file into the process environment
//! - `credentials`: Environment variable names and the required API key lookup

mod credentials;
mod settings;

pub use credentials::{require_api_key, require_var, API_KEY_ENV, BASE_URL_ENV, MODEL_ENV};
pub use settings::load_settings_file;
