use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".course-admin.toml";

/// Load config file content from CWD first, then the config directory, then home
///
/// Searches for `.course-admin.toml` in:
/// 1. Current working directory
/// 2. The application config directory as `config.toml`
/// 3. Home directory as `.course-admin.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let candidates = [crate::paths::app_config_path().ok(), home_config_path()];
    for path in candidates.into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Returns ~/.course-admin.toml if HOME environment variable is set.
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
