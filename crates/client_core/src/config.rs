use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use url::Url;

pub const SETTINGS_FILE_NAME: &str = "event_desk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:3000".into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn server_url(&self) -> Result<Url> {
        Url::parse(self.server_url.trim())
            .with_context(|| format!("invalid server url '{}'", self.server_url))
    }

    /// Applies `key = "value"` pairs from a settings file. Unknown keys are ignored.
    pub fn apply_file(&mut self, raw: &str) -> Result<()> {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
            .context("settings file is not a flat table of strings")?;
        if let Some(v) = file_cfg.get("server_url") {
            self.server_url = v.clone();
        }
        if let Some(v) = file_cfg.get("log_filter") {
            self.log_filter = v.clone();
        }
        Ok(())
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("EVENTS_SERVER_URL") {
            self.server_url = v;
        }
        if let Some(v) = var("APP__SERVER_URL") {
            self.server_url = v;
        }
        if let Some(v) = var("APP__LOG_FILTER") {
            self.log_filter = v;
        }
    }
}

/// Defaults, then the first settings file found, then environment variables.
pub fn load_settings() -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(path) = settings_file_candidates().into_iter().find(|p| p.is_file()) {
        read_settings_file(&mut settings, &path)?;
    }

    settings.apply_env(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()));
    Ok(settings)
}

fn read_settings_file(settings: &mut Settings, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    settings
        .apply_file(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))
}

fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("event_desk").join(SETTINGS_FILE_NAME));
    }
    candidates
}
