//! Application data directory management.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "typeahead";
const STORE_FILE: &str = "frequencies.json";

/// Get the application data directory for the durable store.
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

/// Default path of the frequency store file.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(STORE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_path_ends_with_store_file() {
        let path = default_store_path().unwrap();
        assert!(path.ends_with(STORE_FILE));
    }
}
