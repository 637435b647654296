//! Log directory management
//!
//! Logs are stored in `<state dir>/filetree/logs/` (typically
//! `~/.local/state/filetree/logs/`), one PID-named file per run so several
//! instances can share the directory. Old files of other runs are removed
//! on startup.

use crate::config::APP_DIR_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to `~/.local/state/filetree/logs/` when the platform has no
/// state dir, and to the system temp directory as a last resort.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join(format!("{APP_DIR_NAME}-logs"));
        let dir = state_log_dir().unwrap_or_else(|| fallback.clone());

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback;
        }

        dir
    })
}

fn state_log_dir() -> Option<PathBuf> {
    let state = dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))?;
    Some(state.join(APP_DIR_NAME).join("logs"))
}

/// Path of this process's log file: `{log_dir}/filetree-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(log_file_name(std::process::id()))
}

fn log_file_name(pid: u32) -> String {
    format!("{APP_DIR_NAME}-{pid}.log")
}

/// Remove log files of other runs that have not been touched for a day
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
                removed += 1;
            }
        }
    }
    removed
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed >= age)
        .unwrap_or(false)
}

/// Extract the PID from a file name like "filetree-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    name.strip_prefix(APP_DIR_NAME)?
        .strip_prefix('-')?
        .strip_suffix(".log")?
        .parse()
        .ok()
}
