use std::{collections::BTreeMap, str::FromStr};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::config::{Settings, MAX_TEXT_SCALE, MIN_TEXT_SCALE};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreset::Light => ThemePreset::Dark,
            ThemePreset::Dark => ThemePreset::Light,
        }
    }

    /// Label for the button that switches away from `self`.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemePreset::Light => "🌙",
            ThemePreset::Dark => "☀",
        }
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreset::Light),
            "dark" => Ok(ThemePreset::Dark),
            other => Err(format!("unknown theme '{other}' (expected 'light' or 'dark')")),
        }
    }
}

/// View preferences remembered between runs. The name list is never part of this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedViewSettings {
    pub theme: ThemePreset,
    pub text_scale: f32,
}

impl Default for PersistedViewSettings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PersistedViewSettings {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
            text_scale: settings.text_scale,
        }
    }

    pub fn clamped(self) -> Self {
        let text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            1.0
        };
        Self { text_scale, ..self }
    }
}

pub fn visuals_for_theme(theme: ThemePreset) -> egui::Visuals {
    let mut visuals = match theme {
        ThemePreset::Light => egui::Visuals::light(),
        ThemePreset::Dark => egui::Visuals::dark(),
    };
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.window_corner_radius = egui::CornerRadius::same(8);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

pub fn apply_view_settings(ctx: &egui::Context, view: PersistedViewSettings) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for_theme(view.theme);
    style.text_styles = scaled_text_styles(view.text_scale);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_names_case_insensitively() {
        assert_eq!(" Dark ".parse::<ThemePreset>(), Ok(ThemePreset::Dark));
        assert_eq!("LIGHT".parse::<ThemePreset>(), Ok(ThemePreset::Light));
        assert!("sepia".parse::<ThemePreset>().is_err());
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(ThemePreset::Dark.toggled(), ThemePreset::Light);
        assert_eq!(ThemePreset::Light.toggled().toggled(), ThemePreset::Light);
    }

    #[test]
    fn persisted_settings_fill_missing_fields_and_clamp() {
        let parsed: PersistedViewSettings =
            serde_json::from_str(r#"{"text_scale": 4.0}"#).expect("json");
        let view = parsed.clamped();

        assert_eq!(view.theme, Settings::default().theme);
        assert_eq!(view.text_scale, MAX_TEXT_SCALE);
    }

    #[test]
    fn persisted_settings_round_trip_theme() {
        let view = PersistedViewSettings {
            theme: ThemePreset::Dark,
            text_scale: 1.1,
        };
        let json = serde_json::to_string(&view).expect("serialize");
        assert!(json.contains("\"dark\""));
    }

    #[test]
    fn text_styles_scale_every_font() {
        let base = egui::Style::default().text_styles;
        let scaled = scaled_text_styles(1.5);
        for (style, font) in &scaled {
            assert_eq!(font.size, base[style].size * 1.5);
        }
    }
}
