//! Settings file loading
//!
//! Values from the file are copied into the process environment. Variables
//! that are already set are left untouched.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, TranslatorError};

/// Populate the process environment from a dotenv-style settings file
///
/// # Arguments
/// * `path` - Explicit file to load. When `None`, `.env` is searched for in the
///   current directory and its parents, and a missing file is not an error.
///
/// # Returns
/// Path of the file that was loaded, if any
pub fn load_settings_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                TranslatorError::Settings(format!("{}: {}", path.display(), e))
            })?;
            info!("Loaded settings from {}", path.display());
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => {
                info!("Loaded settings from {}", found.display());
                Ok(Some(found))
            }
            Err(e) if e.not_found() => {
                debug!("No .env file found, using process environment only");
                Ok(None)
            }
            Err(e) => Err(TranslatorError::Settings(e.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.env");
        fs::write(&file, "NLCMD_SETTINGS_TEST_KEY=from-file\n").unwrap();

        let loaded = load_settings_file(Some(&file)).unwrap();

        assert_eq!(loaded.as_deref(), Some(file.as_path()));
        assert_eq!(env::var("NLCMD_SETTINGS_TEST_KEY").unwrap(), "from-file");
    }

    #[test]
    fn test_existing_variable_not_overridden() {
        env::set_var("NLCMD_SETTINGS_TEST_KEEP", "from-process");
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.env");
        fs::write(&file, "NLCMD_SETTINGS_TEST_KEEP=from-file\n").unwrap();

        load_settings_file(Some(&file)).unwrap();

        assert_eq!(env::var("NLCMD_SETTINGS_TEST_KEEP").unwrap(), "from-process");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("does-not-exist.env");

        let err = load_settings_file(Some(&file)).unwrap_err();
        assert!(matches!(err, TranslatorError::Settings(_)));
    }
}
