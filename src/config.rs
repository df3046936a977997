use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

use crate::cfbd::DEFAULT_BASE_URL;
use crate::schedule::{is_valid_time_format, DEFAULT_TIME_FORMAT};
use crate::tui::keys::KeyMap;

/// Environment variable holding the API token; takes precedence over `cfbd_key`
pub const API_KEY_ENV: &str = "CFBD_KEY";

const CONFIG_FILE_NAME: &str = "config.toml";
const SYSTEM_CONFIG_DIR: &str = "/etc/cfbtui";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub log_prefix: String,
    pub cfbd_key: String,
    pub api_base_url: String,
    pub conference: String,
    pub season: i32,
    pub time_format: String,
    pub cache_ttl: u64,
    pub keys: KeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            log_prefix: env!("CARGO_PKG_NAME").to_string(),
            cfbd_key: String::new(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            conference: "SEC".to_string(),
            season: 2022,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            cache_ttl: 60,
            keys: KeyMap::default(),
        }
    }
}

impl Config {
    /// Replace values that parse but cannot be used with their defaults
    pub fn validated(mut self) -> Self {
        if !is_valid_time_format(&self.time_format) {
            eprintln!(
                "Invalid time_format {:?}, using {:?}",
                self.time_format, DEFAULT_TIME_FORMAT
            );
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        self
    }

    /// API token with the environment taking precedence over the file
    pub fn api_key(&self) -> String {
        env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.cfbd_key.clone())
    }
}

/// Config file locations in lookup order: working directory, user config
/// directory, system directory
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(path) = get_config_path() {
        paths.push(path);
    }
    paths.push(Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILE_NAME));
    paths
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join(CONFIG_FILE_NAME))
}

/// First existing config file, if any
pub fn find_config_file() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|path| path.is_file())
}

pub fn read() -> Config {
    match find_config_file() {
        Some(path) => read_from(&path),
        None => Config::default(),
    }
}

/// Read one config file, falling back to defaults when it is unreadable or invalid
pub fn read_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read config {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => config.validated(),
        Err(e) => {
            eprintln!("Invalid config {}: {}", path.display(), e);
            Config::default()
        }
    }
}
