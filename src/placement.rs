//! Placement mode and position-rule composition
//!
//! An annotation is either docked into a side panel reserved by the host's
//! layout pass, or floats at an absolute anchor point inside the plot
//! frame. The mode is re-derived on every paint: the layout pass may
//! assign or clear the panel between two paints of the same model.

use serde::Deserialize;

use crate::anchor::AnchorFraction;
use crate::geometry::{BBox, Point};
use crate::rules::RuleBlock;

/// Side of the plot frame a panel occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

/// Measured extent of the annotation's box, reported to the layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A layout slot reserved on one side of the plot frame. The host's layout
/// pass sizes the slot from the last measured extent; this core only cares
/// that a panel exists at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub side: Side,
    /// Last measured content size, updated by the host between paints
    pub size: Size,
}

impl Panel {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            size: Size::default(),
        }
    }
}

/// Exactly one placement mode is active per paint call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Panel-docked: slot offset and size are the panel's responsibility
    Docked { panel: Panel },
    /// Free-floating at an absolute device-space anchor within a frame
    Floating { anchor: Point, frame: BBox },
}

impl Placement {
    pub fn is_docked(&self) -> bool {
        matches!(self, Placement::Docked { .. })
    }

    /// Position rules for the current mode.
    ///
    /// Docked boxes only establish a relative positioning context so the
    /// panel-assigned sizing takes effect. Floating boxes get absolute
    /// offsets, relativized against the frame origin.
    pub fn position_rules(&self) -> Vec<RuleBlock> {
        match self {
            Placement::Docked { .. } => {
                vec![RuleBlock::host().decl("position", "relative")]
            }
            Placement::Floating { anchor, frame } => {
                let (rx, ry) = frame.relativize(anchor.x, anchor.y);
                vec![RuleBlock::host()
                    .decl("position", "absolute")
                    .px("left", rx)
                    .px("top", ry)]
            }
        }
    }
}

/// Rotation about the box's own anchor point.
///
/// The transform origin is pinned to the anchor fractions and the box is
/// pulled back by the same fractions before rotating, so a right-aligned
/// label pivots on its right edge instead of the top-left corner. At angle
/// 0 the translate still does real work, so the rule is emitted regardless.
pub fn anchor_transform_rule(x: AnchorFraction, y: AnchorFraction, angle: f64) -> RuleBlock {
    let (xp, yp) = (x.as_percent(), y.as_percent());
    RuleBlock::host()
        .decl("transform-origin", format!("{} {}", xp, yp))
        .decl(
            "transform",
            format!("translate(-{}, -{}) rotate({}rad)", xp, yp, angle),
        )
}
