use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, Result};
use crate::layout::{LayoutVariant, TemplateKind};

/// Overlay job configuration: one template shared by every clip, plus the
/// per-clip match facts and input/output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub template: TemplateConfig,
    pub clips: Vec<ClipJob>,
}

impl JobConfig {
    /// Load a job configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let mut config: JobConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseFailed { path: path.display().to_string(), reason: e.to_string() }
        })?;
        config.template.apply_preset()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.template.validate()?;
        for clip in &self.clips {
            clip.meta.validate()?;
        }
        Ok(())
    }
}

/// One clip's input/output locations and match facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipJob {
    /// Directory of input frames for this clip.
    pub input: String,
    /// Directory the composited frames are written to.
    pub output: String,
    pub meta: ClipMeta,
}

/// Visual template selection and semantic colors, shared read-only by all
/// clips of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub template: TemplateKind,
    pub layout: LayoutVariant,
    /// Declared `[width, height]` ratio of the output, e.g. `[16, 9]`.
    pub aspect_ratio: [u32; 2],
    /// Named preset expanded into the four colors below at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub fg_color: String,
    pub bg_color: String,
    pub border_color: String,
    pub text_color: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template: TemplateKind::Rectangle,
            layout: LayoutVariant::Left,
            aspect_ratio: [16, 9],
            preset: None,
            fg_color: "#ffc300".to_string(),
            bg_color: "#14213d".to_string(),
            border_color: "#ffffff".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Expand a named color preset into the four semantic colors. Unknown
    /// preset names are configuration errors; `None` leaves the explicit
    /// colors untouched.
    pub fn apply_preset(&mut self) -> Result<()> {
        let Some(name) = self.preset.as_deref() else { return Ok(()) };
        let (fg, bg, border, text) = match name {
            "red" => ("#d62828", "#1d1d1d", "#ffffff", "#ffffff"),
            "orange" => ("#f77f00", "#22223b", "#ffffff", "#ffffff"),
            "yellow" => ("#ffc300", "#14213d", "#ffffff", "#ffffff"),
            other => {
                return Err(ConfigError::InvalidValue {
                    key: "template.preset".to_string(),
                    value: other.to_string(),
                }
                .into())
            }
        };
        self.fg_color = fg.to_string();
        self.bg_color = bg.to_string();
        self.border_color = border.to_string();
        self.text_color = text.to_string();
        Ok(())
    }

    /// Parse the four semantic colors.
    pub fn colors(&self) -> Result<TemplateColors> {
        Ok(TemplateColors {
            fg: Color::from_hex(&self.fg_color)?,
            bg: Color::from_hex(&self.bg_color)?,
            border: Color::from_hex(&self.border_color)?,
            text: Color::from_hex(&self.text_color)?,
        })
    }

    fn validate(&self) -> Result<()> {
        self.colors()?;
        if self.aspect_ratio[0] == 0 || self.aspect_ratio[1] == 0 {
            return Err(ConfigError::InvalidValue {
                key: "template.aspect_ratio".to_string(),
                value: format!("{:?}", self.aspect_ratio),
            }
            .into());
        }
        Ok(())
    }
}

/// The four semantic template colors, parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
    pub text: Color,
}

/// One team's identity as shown in the overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMeta {
    pub name: String,
    /// 2-4 letter initials shown in the scoreboard strip.
    pub initials: String,
    /// Logo asset name under the asset root.
    pub logo: String,
    /// Two-color jersey palette as hex strings.
    pub colors: [String; 2],
}

impl TeamMeta {
    /// Parse the two-color jersey palette.
    pub fn palette(&self) -> Result<[Color; 2]> {
        Ok([Color::from_hex(&self.colors[0])?, Color::from_hex(&self.colors[1])?])
    }

    fn validate(&self) -> Result<()> {
        self.palette()?;
        let len = self.initials.chars().count();
        if !(2..=4).contains(&len) || !self.initials.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                key: "team.initials".to_string(),
                value: self.initials.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// The event a clip highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "goal")]
    Goal,
    #[serde(rename = "shot")]
    Shot,
    #[serde(rename = "yellow card")]
    YellowCard,
    #[serde(rename = "red card")]
    RedCard,
    #[serde(rename = "penalty")]
    Penalty,
    #[serde(rename = "other")]
    Other,
}

impl ActionKind {
    /// The callout message shown next to the action icon.
    pub fn message(&self) -> &'static str {
        match self {
            ActionKind::Goal => "GOAL!",
            ActionKind::Shot => "SHOT",
            ActionKind::YellowCard => "YELLOW CARD",
            ActionKind::RedCard => "RED CARD",
            ActionKind::Penalty => "PENALTY",
            ActionKind::Other => "HIGHLIGHT",
        }
    }

    /// Asset name of the action icon.
    pub fn icon_name(&self) -> &'static str {
        match self {
            ActionKind::Goal => "goal",
            ActionKind::Shot => "shot",
            ActionKind::YellowCard => "yellow_card",
            ActionKind::RedCard => "red_card",
            ActionKind::Penalty => "penalty",
            ActionKind::Other => "whistle",
        }
    }
}

/// Per-clip match facts, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipMeta {
    pub home: TeamMeta,
    pub visiting: TeamMeta,
    pub league_name: String,
    /// League logo asset name.
    pub league_logo: String,
    /// `(home, visiting)` goals.
    pub score: (u32, u32),
    /// Elapsed game time, preformatted (e.g. "73:12").
    pub game_clock: String,
    pub match_date: NaiveDate,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl ClipMeta {
    /// Scoreboard score text, home first.
    pub fn score_text(&self) -> (String, String) {
        (self.score.0.to_string(), self.score.1.to_string())
    }

    /// Match date as shown in the intro strip.
    pub fn date_text(&self) -> String {
        self.match_date.format("%d %b %Y").to_string()
    }

    pub fn validate(&self) -> Result<()> {
        self.home.validate()?;
        self.visiting.validate()?;
        if self.league_name.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "meta.league_name".to_string(),
                value: String::new(),
            }
            .into());
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_meta;
    use super::*;

    #[test]
    fn test_default_template_is_valid() {
        let config = JobConfig { template: TemplateConfig::default(), clips: vec![] };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("job.json");

        let original = JobConfig {
            template: TemplateConfig::default(),
            clips: vec![ClipJob {
                input: "frames/clip01".to_string(),
                output: "out/clip01".to_string(),
                meta: sample_meta(),
            }],
        };

        original.save_to_file(&file_path).unwrap();
        let loaded = JobConfig::from_file(&file_path).unwrap();

        assert_eq!(loaded.template.fg_color, original.template.fg_color);
        assert_eq!(loaded.clips.len(), 1);
        assert_eq!(loaded.clips[0].meta.score, (2, 1));
        assert_eq!(loaded.clips[0].meta.action, ActionKind::Goal);
    }

    #[test]
    fn test_action_kind_serde_names() {
        let yellow: ActionKind = serde_json::from_str("\"yellow card\"").unwrap();
        assert_eq!(yellow, ActionKind::YellowCard);
        assert_eq!(serde_json::to_string(&ActionKind::RedCard).unwrap(), "\"red card\"");
    }

    #[test]
    fn test_preset_expands_colors() {
        let mut template = TemplateConfig { preset: Some("red".to_string()), ..Default::default() };
        template.apply_preset().unwrap();
        assert_eq!(template.fg_color, "#d62828");

        let mut bad = TemplateConfig { preset: Some("teal".to_string()), ..Default::default() };
        assert!(bad.apply_preset().is_err());
    }

    #[test]
    fn test_invalid_hex_color_rejected() {
        let template = TemplateConfig { fg_color: "ffc300".to_string(), ..Default::default() };
        let config = JobConfig { template, clips: vec![] };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_initials_rejected() {
        let mut meta = sample_meta();
        meta.home.initials = "A".to_string();
        assert!(meta.validate().is_err());

        meta.home.initials = "AV1".to_string();
        assert!(meta.validate().is_err());

        meta.home.initials = "AVFC".to_string();
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_score_and_date_text() {
        let meta = sample_meta();
        assert_eq!(meta.score_text(), ("2".to_string(), "1".to_string()));
        assert_eq!(meta.date_text(), "16 Mar 2024");
    }
}
