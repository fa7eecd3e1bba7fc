// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - initial notification filter
//! - `[modal]` - default modal presentation and transition
//! - `[toast]` - visible toast limit and display durations
//! - `[diagnostics]` - event log capacity
//!
//! # Path Resolution
//!
//! See [`crate::paths`]: explicit path, then `VALET_STATE_CONFIG_DIR`, then
//! the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use valet_state::config;
//!
//! let (mut config, _warning) = config::load();
//! config.toast.max_visible = Some(2);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::toast::{DisplaySecs, VisibleLimit};
use crate::error::{Error, Result};
use crate::modal::{ModalDefaults, PresentationKind, TransitionKind};
use crate::notifications::{NotificationFilter, NotificationType};
use crate::paths;
use crate::toast::Timings;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the file exists but cannot be used.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Initial notification list filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_show_read", skip_serializing_if = "Option::is_none")]
    pub show_read: Option<bool>,

    #[serde(default = "default_show_unread", skip_serializing_if = "Option::is_none")]
    pub show_unread: Option<bool>,

    /// Types to include; empty means all.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub types: BTreeSet<NotificationType>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            show_read: default_show_read(),
            show_unread: default_show_unread(),
            types: BTreeSet::new(),
        }
    }
}

/// Modal presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ModalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_presentation: Option<PresentationKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_transition: Option<TransitionKind>,
}

/// Toast display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    #[serde(default = "default_success_secs", skip_serializing_if = "Option::is_none")]
    pub success_secs: Option<u32>,

    #[serde(default = "default_warning_secs", skip_serializing_if = "Option::is_none")]
    pub warning_secs: Option<u32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            success_secs: default_success_secs(),
            warning_secs: default_warning_secs(),
        }
    }
}

/// Diagnostic event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// User preferences, one field per `settings.toml` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub modal: ModalConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Initial notification filter.
    #[must_use]
    pub fn notification_filter(&self) -> NotificationFilter {
        NotificationFilter {
            show_read: self.notifications.show_read.unwrap_or(DEFAULT_SHOW_READ),
            show_unread: self.notifications.show_unread.unwrap_or(DEFAULT_SHOW_UNREAD),
            types: self.notifications.types.clone(),
        }
    }

    #[must_use]
    pub fn modal_defaults(&self) -> ModalDefaults {
        ModalDefaults {
            presentation: self.modal.default_presentation.unwrap_or_default(),
            transition: self.modal.default_transition.unwrap_or_default(),
        }
    }

    /// Visible toast limit, clamped to its valid range.
    #[must_use]
    pub fn toast_limit(&self) -> VisibleLimit {
        VisibleLimit::new(self.toast.max_visible.unwrap_or(DEFAULT_TOAST_MAX_VISIBLE))
    }

    /// Toast durations, clamped to their valid range.
    #[must_use]
    pub fn toast_timings(&self) -> Timings {
        Timings {
            short: DisplaySecs::new(self.toast.success_secs.unwrap_or(DEFAULT_TOAST_SUCCESS_SECS)),
            long: DisplaySecs::new(self.toast.warning_secs.unwrap_or(DEFAULT_TOAST_WARNING_SECS)),
        }
    }

    /// Diagnostic buffer capacity, clamped to its valid range.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.diagnostics
                .buffer_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_read() -> Option<bool> {
    Some(DEFAULT_SHOW_READ)
}

fn default_show_unread() -> Option<bool> {
    Some(DEFAULT_SHOW_UNREAD)
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_TOAST_MAX_VISIBLE)
}

fn default_success_secs() -> Option<u32> {
    Some(DEFAULT_TOAST_SUCCESS_SECS)
}

fn default_warning_secs() -> Option<u32> {
    Some(DEFAULT_TOAST_WARNING_SECS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable one yields
/// defaults plus [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// [`load`] from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and a config error if it
/// is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Propagates [`save_to_path`] errors.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// [`save`] into a custom directory.
///
/// # Errors
///
/// Propagates [`save_to_path`] errors.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific file, creating parent directories.
///
/// # Errors
///
/// Returns an I/O error on write failure, a config error on serialization
/// failure.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
