use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.6;
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemePreset,
    pub text_scale: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 480.0,
            window_height: 640.0,
            theme: ThemePreset::Light,
            text_scale: 1.0,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    window_width: Option<f32>,
    window_height: Option<f32>,
    theme: Option<ThemePreset>,
    text_scale: Option<f32>,
    log_filter: Option<String>,
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("letter_assigner").join("settings.toml"))
}

/// Defaults, then the TOML file at `path` (or the per-user default location), then
/// `APP__*` environment overrides. A missing file is not an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let path = path.map(Path::to_path_buf).or_else(default_settings_path);
    let mut settings = Settings::default();

    if let Some(path) = path.as_deref() {
        if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            apply_file_settings(&mut settings, &raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(clamped(settings))
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file_cfg.theme {
        settings.theme = v;
    }
    if let Some(v) = file_cfg.text_scale {
        settings.text_scale = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__THEME") {
        match v.parse::<ThemePreset>() {
            Ok(theme) => settings.theme = theme,
            Err(err) => tracing::warn!(value = %v, %err, "ignoring APP__THEME"),
        }
    }
    if let Some(v) = lookup("APP__TEXT_SCALE") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.text_scale = parsed;
        }
    }
    if let Some(v) = lookup("APP__WINDOW_WIDTH") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_width = parsed;
        }
    }
    if let Some(v) = lookup("APP__WINDOW_HEIGHT") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_height = parsed;
        }
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}

fn clamped(mut settings: Settings) -> Settings {
    let defaults = Settings::default();
    if !settings.text_scale.is_finite() {
        settings.text_scale = defaults.text_scale;
    }
    if !settings.window_width.is_finite() {
        settings.window_width = defaults.window_width;
    }
    if !settings.window_height.is_finite() {
        settings.window_height = defaults.window_height;
    }
    settings.text_scale = settings.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
    settings.window_width = settings.window_width.max(MIN_WINDOW_WIDTH);
    settings.window_height = settings.window_height.max(MIN_WINDOW_HEIGHT);
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
