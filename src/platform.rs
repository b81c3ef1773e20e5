//! Cross-platform state directory resolution.
//!
//! The remembered city lives in a small JSON file; this module decides
//! where that file goes, falling back through several locations until one
//! is writable.

use crate::config::APP_DIR;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "iftar-countdown";

/// Get the state directory with cross-platform fallback chain.
///
/// Priority order:
/// 1. Explicit override (for testing/CI)
/// 2. Home directory (~/.iftar-countdown)
/// 3. Platform-specific data directory (XDG on Linux, AppData on Windows)
/// 4. Current working directory (last resort)
pub fn get_state_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        ensure_writable(dir)?;
        return Ok(dir.to_path_buf());
    }

    if let Some(home) = home::home_dir() {
        let dir = home.join(APP_DIR);
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
        tracing::warn!(
            "Cannot write to {}. Trying fallback locations.",
            dir.display()
        );
    }

    // - Linux: ~/.local/share/iftar-countdown
    // - macOS: ~/Library/Application Support/iftar-countdown
    // - Windows: C:\Users\<User>\AppData\Local\iftar-countdown
    if let Some(data) = dirs::data_local_dir() {
        let dir = data.join(DATA_DIR_NAME);
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
    }

    let dir = PathBuf::from(APP_DIR);
    ensure_writable(&dir).context(
        "Cannot create state directory in any location. \
         Check file permissions or set state.state_dir_override in config.",
    )?;
    Ok(dir)
}

/// Create `dir` if needed and check that a file can be written into it.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let test_path = dir.join(".write_test");
    fs::write(&test_path, b"test")
        .with_context(|| format!("Directory {} is not writable", dir.display()))?;

    // Ignore errors (file might be held by antivirus on Windows)
    let _ = fs::remove_file(&test_path);

    Ok(())
}

/// Lock and state file paths, respecting the config override.
pub fn state_paths(state_dir_override: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    let state_dir = get_state_dir(state_dir_override)?;
    Ok((state_dir.join("state.lock"), state_dir.join("state.json")))
}
