use std::path::PathBuf;

use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

use crate::events::AppEvent;
use async_channel::Sender;

/// Which of the two historical snap/selection conventions the wheel uses.
/// `Nearest` rounds the committed rotation to the closest slot; `OffsetFloor`
/// shifts the slot boundaries by half a slot before flooring.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum SnapConvention {
    #[default]
    #[strum(serialize = "nearest", serialize = "round")]
    Nearest,
    #[strum(serialize = "offset-floor", serialize = "offset_floor", serialize = "offset")]
    OffsetFloor,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub snap_convention: SnapConvention,
    /// Keep symbol glyphs upright while the wheel spins.
    pub upright_symbols: bool,
    /// Slot indices that get a highlight marker circle.
    pub highlight_slots: Vec<usize>,
    /// Slot indices that get a purple accent marker, shown while the
    /// toggle is on.
    pub accent_slots: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap_convention: SnapConvention::default(),
            upright_symbols: false,
            highlight_slots: vec![2, 4, 6, 8, 10],
            accent_slots: vec![1, 5, 9],
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "zodiac", "zodiac-wheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path_override: Option<&PathBuf>) -> Result<Config, ConfigError> {
    let config_path = match path_override {
        Some(p) => p.clone(),
        None => get_config_path()?,
    };

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("ZODIAC"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Load the config, falling back to the built-in defaults when the file is
/// missing or broken. A broken file is logged, never fatal.
pub fn load_or_default(path_override: Option<&PathBuf>) -> Config {
    match load_config(path_override) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Watches the config directory and emits `ConfigReload` whenever the
/// config file changes, so marker and convention edits apply live.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
