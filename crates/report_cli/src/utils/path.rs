use std::path::{Path, PathBuf};

/// Expand home directory (~) in path
///
/// Only a leading `~` or `~/` is expanded; `~user` forms are left alone.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Resolve the data file path given on the command line
///
/// Falls back to `default` when no path was supplied.
pub fn resolve_data_path(path: Option<PathBuf>, default: &str) -> PathBuf {
    let raw = path.unwrap_or_else(|| PathBuf::from(default));
    expand_home(&raw)
}
