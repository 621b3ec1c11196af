//! Immutable paint snapshot taken from the host's drawing context
//!
//! The host resolves its canvas-style visual channels once per paint and
//! hands the result here by value. An inactive channel is `None` and
//! contributes no declarations at all, as opposed to a transparent value.

use crate::anchor::{TextAlign, TextBaseline};

/// Text channel: always active while the annotation is visible
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    /// Fill color of the glyphs, any CSS color form
    pub color: String,
    /// Stroke color used for the 1px text outline
    pub outline_color: String,
    /// Complete CSS font descriptor (e.g. `13px sans-serif`)
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Background fill channel
#[derive(Debug, Clone, PartialEq)]
pub struct FillPaint {
    pub color: String,
}

/// Border line channel
#[derive(Debug, Clone, PartialEq)]
pub struct LinePaint {
    pub color: String,
    pub width: f64,
    /// Dash segment lengths, as the canvas reports them
    pub dash: Vec<f64>,
}

impl LinePaint {
    /// A box border cannot reproduce arbitrary dash patterns. Fewer than
    /// two segments renders solid; anything longer is approximated as
    /// dashed, whatever the segment lengths. Known limitation.
    pub fn border_style(&self) -> &'static str {
        if self.dash.len() < 2 {
            "solid"
        } else {
            "dashed"
        }
    }
}

/// Snapshot of all visual channels for one paint call
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub text: TextPaint,
    pub background_fill: Option<FillPaint>,
    pub border_line: Option<LinePaint>,
}
