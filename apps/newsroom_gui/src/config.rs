use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "newsroom.toml";
const CONFIG_DIR_NAME: &str = "ailancy-newsroom";
const ASSET_DIR_NAME: &str = "public";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub news_file: Option<PathBuf>,
    pub asset_dir: PathBuf,
    pub remote_images: bool,
    pub image_timeout_secs: u64,
    pub ambient_background: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Ailancy Internal News".into(),
            window_width: 1280.0,
            window_height: 800.0,
            news_file: None,
            asset_dir: default_asset_dir(),
            remote_images: true,
            image_timeout_secs: 10,
            ambient_background: true,
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then the first config file found, then `NEWSROOM_*` variables.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => match discover_config_file() {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// `./public` when present, else `public` next to the executable, else the
/// directory shipped with the crate sources.
pub fn default_asset_dir() -> PathBuf {
    let next_to_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSET_DIR_NAME)));
    let candidates = [
        Some(PathBuf::from(".").join(ASSET_DIR_NAME)),
        next_to_exe,
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ASSET_DIR_NAME)),
    ];
    first_existing_dir(candidates.into_iter().flatten())
        .unwrap_or_else(|| PathBuf::from(".").join(ASSET_DIR_NAME))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_dir())
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = non_empty("NEWSROOM_NEWS_FILE") {
        settings.news_file = Some(PathBuf::from(v));
    }
    if let Some(v) = non_empty("NEWSROOM_ASSET_DIR") {
        settings.asset_dir = PathBuf::from(v);
    }
    if let Some(v) = non_empty("NEWSROOM_REMOTE_IMAGES").and_then(|v| parse_flag(&v)) {
        settings.remote_images = v;
    }
    if let Some(v) = non_empty("NEWSROOM_AMBIENT").and_then(|v| parse_flag(&v)) {
        settings.ambient_background = v;
    }
    if let Some(v) = non_empty("NEWSROOM_LOG") {
        settings.log_filter = v;
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
