//! Theme support for annotation paint defaults
//!
//! A theme is a TOML file mapping the annotation's visual channels (text,
//! background, border) to concrete values, so hosts can restyle callouts
//! without touching code. Channels omitted from the file are inactive,
//! except text which always falls back to the built-in defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::anchor::{TextAlign, TextBaseline};
use crate::visuals::{FillPaint, LinePaint, PaintState, TextPaint};

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A named set of paint defaults for annotations
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    paint: PaintState,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    text: Option<TomlText>,
    background: Option<TomlBackground>,
    border: Option<TomlBorder>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlText {
    color: Option<String>,
    outline: Option<String>,
    font: Option<String>,
    align: Option<TextAlign>,
    baseline: Option<TextBaseline>,
}

#[derive(Deserialize)]
struct TomlBackground {
    color: String,
}

#[derive(Deserialize)]
struct TomlBorder {
    color: String,
    #[serde(default = "default_border_width")]
    width: f64,
    #[serde(default)]
    dash: Vec<f64>,
}

fn default_border_width() -> f64 {
    1.0
}

/// Default theme - dark gray text on a white box with a light border
const DEFAULT_THEME: &str = r##"
[metadata]
name = "default"
description = "Neutral annotation styling"

[text]
color = "#444444"
outline = "#ffffff"
font = "13px Helvetica, Arial, sans-serif"
align = "left"
baseline = "bottom"

[background]
color = "#ffffff"

[border]
color = "#e5e5e5"
width = 1.0
dash = []
"##;

fn builtin_text() -> TextPaint {
    TextPaint {
        color: "#444444".to_string(),
        outline_color: "#ffffff".to_string(),
        font: "13px Helvetica, Arial, sans-serif".to_string(),
        align: TextAlign::Left,
        baseline: TextBaseline::Bottom,
    }
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        let fallback = builtin_text();
        let text = match parsed.text {
            Some(t) => TextPaint {
                color: t.color.unwrap_or(fallback.color),
                outline_color: t.outline.unwrap_or(fallback.outline_color),
                font: t.font.unwrap_or(fallback.font),
                align: t.align.unwrap_or(fallback.align),
                baseline: t.baseline.unwrap_or(fallback.baseline),
            },
            None => fallback,
        };

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            paint: PaintState {
                text,
                background_fill: parsed
                    .background
                    .map(|b| FillPaint { color: b.color }),
                border_line: parsed.border.map(|b| LinePaint {
                    color: b.color,
                    width: b.width,
                    dash: b.dash,
                }),
            },
        })
    }

    /// Snapshot of the theme's paint channels for one paint call
    pub fn paint_state(&self) -> PaintState {
        self.paint.clone()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_str(DEFAULT_THEME).expect("Default theme should be valid TOML")
    }
}
