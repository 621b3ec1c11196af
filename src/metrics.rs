//! Shorthand box properties expanded to explicit four-sided values
//!
//! Padding and corner radius accept either a single number applied
//! everywhere or an explicit per-side/per-corner record. Missing entries
//! default to 0. Validation (non-negative numbers) is the property
//! system's job upstream; resolution here is pure and total.

use serde::Deserialize;

/// Padding shorthand: one value for all sides, or a per-side record
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    PerSide {
        #[serde(default)]
        left: f64,
        #[serde(default)]
        right: f64,
        #[serde(default)]
        top: f64,
        #[serde(default)]
        bottom: f64,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(0.0)
    }
}

/// Corner-radius shorthand: one value for all corners, or a per-corner record
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(f64),
    PerCorner {
        #[serde(default)]
        top_left: f64,
        #[serde(default)]
        top_right: f64,
        #[serde(default)]
        bottom_right: f64,
        #[serde(default)]
        bottom_left: f64,
    },
}

impl Default for BorderRadius {
    fn default() -> Self {
        BorderRadius::Uniform(0.0)
    }
}

/// Explicit four-sided padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lrtb {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Explicit four-corner radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

/// Expand a padding shorthand into explicit per-side values
pub fn resolve_padding(spec: Padding) -> Lrtb {
    match spec {
        Padding::Uniform(value) => Lrtb {
            left: value,
            right: value,
            top: value,
            bottom: value,
        },
        Padding::PerSide {
            left,
            right,
            top,
            bottom,
        } => Lrtb {
            left,
            right,
            top,
            bottom,
        },
    }
}

/// Expand a corner-radius shorthand into explicit per-corner values
pub fn resolve_border_radius(spec: BorderRadius) -> Corners {
    match spec {
        BorderRadius::Uniform(value) => Corners {
            top_left: value,
            top_right: value,
            bottom_right: value,
            bottom_left: value,
        },
        BorderRadius::PerCorner {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => Corners {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        },
    }
}

/// Resolved box metrics for one paint; recomputed every time, never cached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    pub padding: Lrtb,
    pub border_radius: Corners,
}

impl BoxMetrics {
    pub fn resolve(padding: Padding, border_radius: BorderRadius) -> Self {
        Self {
            padding: resolve_padding(padding),
            border_radius: resolve_border_radius(border_radius),
        }
    }
}
