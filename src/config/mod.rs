//! Configuration management for osonews.
//!
//! Configuration is read from `~/.config/osonews/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::feed::DEFAULT_WORKERS;
use crate::fetcher::http_fetcher::DEFAULT_TIMEOUT_SECS;
use crate::upstream::DEFAULT_BASE_URL;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub colors: ColorConfig,
    /// Keys missing from `[dark_colors]` fall back to the light palette.
    #[serde(default = "ColorConfig::dark")]
    pub dark_colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            colors: ColorConfig::default(),
            dark_colors: ColorConfig::dark(),
            keybindings: KeybindingConfig::default(),
        }
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. A story that times out is left out of the feed;
    /// a comment that times out is removed from the loading list.
    pub timeout_secs: u64,
    /// Comment resolutions allowed in flight at once.
    pub comment_workers: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            comment_workers: DEFAULT_WORKERS,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/osonews/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("osonews").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# osonews configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[api]
base_url = "https://hacker-news.firebaseio.com/v0/"

# Requests slower than this give up. Stories that time out are left out of
# the feed, comments that time out disappear from the loading list.
timeout_secs = 10

# Comments resolved at the same time when opening a story
comment_workers = 10

[colors]
background = "White"
text = "Black"
border = "Blue"
selection_bg = "Blue"
selection_fg = "White"
bookmarked = "Red"
metadata_author = "DarkGray"
metadata_score = "Magenta"
metadata_age = "DarkGray"
metadata_link = "Blue"
pending = "Gray"
status_fg = "White"
status_bg = "Blue"

# Used after toggling the theme. Missing keys fall back to [colors].
[dark_colors]
background = "Black"
text = "White"
border = "Cyan"
selection_bg = "Cyan"
selection_fg = "Black"
bookmarked = "LightRed"
metadata_author = "Yellow"
metadata_score = "LightMagenta"
metadata_age = "Gray"
metadata_link = "LightBlue"
pending = "DarkGray"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]

# Open the comments of the selected story
select = ["Enter", "c"]
back = ["Esc", "Backspace", "h"]

toggle_bookmark = ["b"]
toggle_bookmarks_view = ["B", "Tab"]
open_in_browser = ["o"]
refresh = ["R"]
toggle_theme = ["t"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
