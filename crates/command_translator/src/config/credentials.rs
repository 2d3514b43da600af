//! Credential lookup from the process environment

use std::env;

use crate::error::{Result, TranslatorError};

/// Environment variable holding the completion service API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the model name
pub const MODEL_ENV: &str = "GROQ_MODEL";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";

/// Read the API key from the process environment
///
/// Fails with [`TranslatorError::MissingCredential`] when `GROQ_API_KEY` is
/// unset or empty.
pub fn require_api_key() -> Result<String> {
    require_var(API_KEY_ENV, |name| env::var(name).ok())
}

/// Look up a required variable through `lookup`, treating empty values as missing
pub fn require_var<F>(name: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(TranslatorError::MissingCredential(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in<'a>(
        vars: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_require_var_present() {
        let vars = HashMap::from([(API_KEY_ENV, "gsk-test")]);
        let key = require_var(API_KEY_ENV, lookup_in(&vars)).unwrap();
        assert_eq!(key, "gsk-test");
    }

    #[test]
    fn test_require_var_missing() {
        let vars = HashMap::new();
        let err = require_var(API_KEY_ENV, lookup_in(&vars)).unwrap_err();
        assert!(matches!(err, TranslatorError::MissingCredential(ref name) if name == API_KEY_ENV));
        assert_eq!(err.to_string(), "GROQ_API_KEY not found in .env file.");
    }

    #[test]
    fn test_require_var_empty_is_missing() {
        let vars = HashMap::from([(API_KEY_ENV, "")]);
        assert!(require_var(API_KEY_ENV, lookup_in(&vars)).is_err());
    }
}
