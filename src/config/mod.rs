use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Which panel sits next to the category chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PanelVariant {
    /// Revenue per region, shaded by value
    #[default]
    Map,
    /// One sparkline per category
    Trends,
}

impl PanelVariant {
    pub fn toggled(self) -> Self {
        match self {
            PanelVariant::Map => PanelVariant::Trends,
            PanelVariant::Trends => PanelVariant::Map,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelVariant::Map => "Revenue Per State",
            PanelVariant::Trends => "Category Trends",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub panel: PanelVariant,
    pub tick_ms: u64,
    pub notice_secs: u64,
    pub star_glyph: char,
    pub max_stars: u8,
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel: PanelVariant::Map,
            tick_ms: 200,
            notice_secs: 3,
            star_glyph: '★',
            max_stars: 5,
            export_dir: None,
        }
    }
}

/// Load from the first discovered config path, falling back to defaults.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Missing files are silent; unreadable or malformed ones are logged and
/// replaced by defaults.
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Config::default(),
        Err(err) => {
            warn!(path = %path.display(), %err, "config unreadable, using defaults");
            return Config::default();
        }
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "config invalid, using defaults");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CAMPADMIN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("campadmin").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("campadmin").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "campadmin", "campadmin")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("campadmin"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("campadmin"));
    }
    directories::ProjectDirs::from("io", "campadmin", "campadmin")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("campadmin.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "panel = \"trends\"\nstar_glyph = \"*\"\n").unwrap();
        let config = load_from(&path);
        assert_eq!(config.panel, PanelVariant::Trends);
        assert_eq!(config.star_glyph, '*');
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.max_stars, 5);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "panel = \"globe\"\n").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn test_panel_toggle() {
        assert_eq!(PanelVariant::Map.toggled(), PanelVariant::Trends);
        assert_eq!(PanelVariant::Trends.toggled(), PanelVariant::Map);
    }
}
