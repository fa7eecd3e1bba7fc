// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override**: the `override_path` argument (tests, embedders)
//! 2. **Environment variable**: `VALET_STATE_CONFIG_DIR` / `VALET_STATE_DATA_DIR`
//! 3. **Platform default**: via the `dirs` crate, with `ValetState` appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ValetState";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "VALET_STATE_CONFIG_DIR";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "VALET_STATE_DATA_DIR";

fn resolve(
    override_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory holding `settings.toml`.
///
/// Returns `None` only if the platform has no config directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_CONFIG_DIR, dirs::config_dir)
}

/// Directory for application data such as exported diagnostic reports.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_DATA_DIR, dirs::data_dir)
}

/// Default directory for diagnostic reports: `<data dir>/diagnostics`.
#[must_use]
pub fn diagnostics_export_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None).map(|mut path| {
        path.push("diagnostics");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/custom/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/from/env");

        let dir = get_app_data_dir_with_override(None);
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_var_falls_back_to_platform_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let dir = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = dir {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn diagnostics_dir_is_under_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/data/root");

        let dir = diagnostics_export_dir();
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(dir, Some(PathBuf::from("/data/root/diagnostics")));
    }
}
