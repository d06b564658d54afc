//! Dashboard Configuration
//!
//! Defaults ship embedded from `dashboard.toml`; native tools may load an
//! override from disk.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::gantt::TimelineWindow;
use crate::tree::ExpandedSet;

/// The bundled `dashboard.toml`
pub const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 4D timeline window and playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Slider position on open, 0..=100
    pub initial_position: u8,
    /// Distance moved by the skip buttons
    pub step_percent: u8,
    /// Delay between slider steps while playing
    pub play_interval_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            window_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default(),
            initial_position: 50,
            step_percent: 10,
            play_interval_ms: 250,
        }
    }
}

/// 5D cost planner table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostPlannerConfig {
    /// Indentation per BQ level, in pixels
    pub indent_px: u32,
    pub expanded_bq: ExpandedSet,
    pub expanded_elements: ExpandedSet,
}

impl Default for CostPlannerConfig {
    fn default() -> Self {
        Self {
            indent_px: 12,
            expanded_bq: ExpandedSet::new(),
            expanded_elements: ExpandedSet::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaEditorConfig {
    pub default_formula: String,
    pub expanded_nodes: ExpandedSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub timeline: TimelineConfig,
    pub cost_planner: CostPlannerConfig,
    pub formula_editor: FormulaEditorConfig,
}

impl DashboardConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded dashboard config from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeline = &self.timeline;
        self.timeline_window()?;
        if !(1..=100).contains(&timeline.step_percent) {
            return Err(ConfigError::Invalid(format!(
                "timeline.step_percent must be 1..=100, got {}",
                timeline.step_percent
            )));
        }
        if timeline.initial_position > 100 {
            return Err(ConfigError::Invalid(format!(
                "timeline.initial_position must be at most 100, got {}",
                timeline.initial_position
            )));
        }
        if timeline.play_interval_ms == 0 {
            return Err(ConfigError::Invalid("timeline.play_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn timeline_window(&self) -> Result<TimelineWindow, ConfigError> {
        TimelineWindow::new(self.timeline.window_start, self.timeline.window_end)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = DashboardConfig::embedded().unwrap();
        assert_eq!(config.timeline.step_percent, 10);
        assert_eq!(config.timeline_window().unwrap().total_days(), 180.0);
        assert!(config.cost_planner.expanded_bq.contains("BQ001"));
        assert!(config.cost_planner.expanded_elements.contains("E001"));
        assert_eq!(config.formula_editor.default_formula, "0 + Excavation_1.5~3m:Net Volume");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DashboardConfig::from_toml_str("[cost_planner]\nindent_px = 20\n").unwrap();
        assert_eq!(config.cost_planner.indent_px, 20);
        assert!(config.cost_planner.expanded_bq.is_empty());
        assert_eq!(config.timeline, TimelineConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        let reversed = "[timeline]\nwindow_start = \"2025-06-30\"\nwindow_end = \"2025-01-01\"\n";
        assert!(matches!(DashboardConfig::from_toml_str(reversed), Err(ConfigError::Invalid(_))));

        let zero_step = "[timeline]\nstep_percent = 0\n";
        assert!(matches!(DashboardConfig::from_toml_str(zero_step), Err(ConfigError::Invalid(_))));

        assert!(matches!(DashboardConfig::from_toml_str("timeline = 3"), Err(ConfigError::Parse(_))));
    }
}
