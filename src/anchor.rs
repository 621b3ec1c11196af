//! Text alignment and baseline mapped to normalized anchor fractions
//!
//! The anchor fraction doubles as the rotation pivot for floating
//! annotations: a right-aligned, bottom-baseline label rotates about its
//! bottom-right corner, not the top-left of the box.

use serde::Deserialize;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical text baseline, matching the canvas baseline vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
    Alphabetic,
    Hanging,
    Ideographic,
}

/// Normalized alignment point along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorFraction {
    Start,
    Center,
    End,
}

impl AnchorFraction {
    /// CSS percentage form, used for both transform-origin and translate
    pub fn as_percent(&self) -> &'static str {
        match self {
            AnchorFraction::Start => "0%",
            AnchorFraction::Center => "50%",
            AnchorFraction::End => "100%",
        }
    }
}

impl TextAlign {
    pub fn x_fraction(self) -> AnchorFraction {
        match self {
            TextAlign::Left => AnchorFraction::Start,
            TextAlign::Center => AnchorFraction::Center,
            TextAlign::Right => AnchorFraction::End,
        }
    }
}

impl TextBaseline {
    /// Baselines without a box-relative meaning anchor at the middle
    pub fn y_fraction(self) -> AnchorFraction {
        match self {
            TextBaseline::Top => AnchorFraction::Start,
            TextBaseline::Middle => AnchorFraction::Center,
            TextBaseline::Bottom => AnchorFraction::End,
            _ => AnchorFraction::Center,
        }
    }
}
