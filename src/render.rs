//! Paint orchestration
//!
//! Drives metric, placement and style resolution on every change
//! notification and hands the result to a retained surface. A paint run
//! is synchronous and fully supersedes the previous one: the surface's
//! rule blocks are replaced wholesale, never patched.

use crate::log::debug;
use crate::metrics::{BorderRadius, BoxMetrics, Padding};
use crate::placement::Placement;
use crate::rules::render_css;
use crate::style::compose_style;
use crate::visuals::PaintState;

/// The annotation model as observed by the resolver. Owned and mutated by
/// the host; read once per paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub visible: bool,
    pub text: String,
    /// Rotation angle in radians
    pub angle: f64,
    pub padding: Padding,
    pub border_radius: BorderRadius,
}

impl Annotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            visible: true,
            text: text.into(),
            angle: 0.0,
            padding: Padding::default(),
            border_radius: BorderRadius::default(),
        }
    }

    /// Set the rotation angle in radians
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the padding shorthand
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the corner-radius shorthand
    pub fn with_border_radius(mut self, border_radius: BorderRadius) -> Self {
        self.border_radius = border_radius;
        self
    }

    /// Set the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Retained rendering surface owned by the host. The orchestrator is the
/// only writer: text, rule blocks and visibility are replaced as a whole
/// on each paint.
pub trait Surface {
    /// Replace the text node's content
    fn set_text(&mut self, text: &str);
    /// Replace the position rule block
    fn replace_position(&mut self, css: &str);
    /// Replace the style rule block
    fn replace_style(&mut self, css: &str);
    /// Show or hide the box element
    fn set_visible(&mut self, visible: bool);
}

/// Run one paint of the annotation.
///
/// An invisible annotation only hides the box; all resolution work is
/// skipped. Otherwise the text is updated, box metrics and placement are
/// resolved fresh, and the composed position/style blocks replace the
/// surface's previous ones. Identical inputs produce byte-identical
/// output.
pub fn paint<S: Surface>(
    annotation: &Annotation,
    placement: &Placement,
    visuals: &PaintState,
    surface: &mut S,
) {
    if !annotation.visible {
        surface.set_visible(false);
        return;
    }

    debug!(
        "painting annotation: docked={} angle={}",
        placement.is_docked(),
        annotation.angle
    );

    surface.set_text(&annotation.text);

    let metrics = BoxMetrics::resolve(annotation.padding, annotation.border_radius);
    let position = placement.position_rules();
    let style = compose_style(placement, annotation.angle, &metrics, visuals);

    surface.replace_position(&render_css(&position));
    surface.replace_style(&render_css(&style));
    surface.set_visible(true);
}

/// In-memory retained surface holding the last fully applied paint. Useful
/// for hosts that forward rule text elsewhere, and for tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    pub text: String,
    pub position: String,
    pub style: String,
    pub visible: bool,
}

impl Surface for MemorySurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn replace_position(&mut self, css: &str) {
        self.position = css.to_string();
    }

    fn replace_style(&mut self, css: &str) {
        self.style = css.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
