//! Style-rule composition for the annotation text box
//!
//! The composer is pure: given the placement, rotation angle, resolved box
//! metrics and the paint snapshot it returns the full rule list for one
//! paint. Rule order follows a fixed precedence; later blocks only add
//! declarations.

use crate::metrics::BoxMetrics;
use crate::placement::{anchor_transform_rule, Placement};
use crate::rules::RuleBlock;
use crate::visuals::PaintState;

/// Docked boxes flow vertically when rotated: the panel owns the slot, so
/// only the writing mode flips and the box self-aligns to the panel's end
/// edge. The actual angle value is ignored, only non-zero matters.
fn vertical_flow_rule() -> RuleBlock {
    RuleBlock::host()
        .decl("writing-mode", "vertical-rl")
        .decl("rotate", "180deg")
        .decl("align-self", "end")
}

/// Compose the complete style description for one paint.
///
/// Always emits content-driven sizing, text paint and the four-sided
/// padding/radius declarations. Rotation handling is asymmetric on
/// purpose: docked mode emits the vertical writing rule only for non-zero
/// angles, while floating mode always emits the anchor translate+rotate
/// rule, even at angle 0, because the translate positions the box.
pub fn compose_style(
    placement: &Placement,
    angle: f64,
    metrics: &BoxMetrics,
    paint: &PaintState,
) -> Vec<RuleBlock> {
    let mut rules = Vec::new();

    let padding = metrics.padding;
    let radius = metrics.border_radius;

    rules.push(
        RuleBlock::host()
            .decl("width", "max-content")
            .decl("height", "max-content")
            .decl("color", paint.text.color.clone())
            .decl(
                "-webkit-text-stroke",
                format!("1px {}", paint.text.outline_color),
            )
            .decl("font", paint.text.font.clone())
            .decl("white-space", "pre")
            .px("padding-left", padding.left)
            .px("padding-right", padding.right)
            .px("padding-top", padding.top)
            .px("padding-bottom", padding.bottom)
            .px("border-top-left-radius", radius.top_left)
            .px("border-top-right-radius", radius.top_right)
            .px("border-bottom-right-radius", radius.bottom_right)
            .px("border-bottom-left-radius", radius.bottom_left),
    );

    match placement {
        Placement::Docked { .. } => {
            if angle != 0.0 {
                rules.push(vertical_flow_rule());
            }
        }
        Placement::Floating { .. } => {
            rules.push(anchor_transform_rule(
                paint.text.align.x_fraction(),
                paint.text.baseline.y_fraction(),
                angle,
            ));
        }
    }

    if let Some(fill) = &paint.background_fill {
        rules.push(RuleBlock::host().decl("background-color", fill.color.clone()));
    }

    if let Some(line) = &paint.border_line {
        rules.push(
            RuleBlock::host()
                .decl("border-style", line.border_style())
                .px("border-width", line.width)
                .decl("border-color", line.color.clone()),
        );
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{TextAlign, TextBaseline};
    use crate::geometry::{BBox, Point};
    use crate::metrics::{BorderRadius, Padding};
    use crate::placement::{Panel, Side};
    use crate::rules::render_css;
    use crate::visuals::{FillPaint, LinePaint, TextPaint};

    fn plain_paint() -> PaintState {
        PaintState {
            text: TextPaint {
                color: "#1a1a1a".to_string(),
                outline_color: "#ffffff".to_string(),
                font: "13px sans-serif".to_string(),
                align: TextAlign::Left,
                baseline: TextBaseline::Bottom,
            },
            background_fill: None,
            border_line: None,
        }
    }

    fn metrics() -> BoxMetrics {
        BoxMetrics::resolve(Padding::Uniform(4.0), BorderRadius::Uniform(2.0))
    }

    fn docked() -> Placement {
        Placement::Docked {
            panel: Panel::new(Side::Above),
        }
    }

    fn floating() -> Placement {
        Placement::Floating {
            anchor: Point::new(10.0, 20.0),
            frame: BBox::new(0.0, 0.0, 100.0, 100.0),
        }
    }

    #[test]
    fn test_base_rule_always_present() {
        let css = render_css(&compose_style(&docked(), 0.0, &metrics(), &plain_paint()));
        assert!(css.contains("width: max-content;"));
        assert!(css.contains("height: max-content;"));
        assert!(css.contains("white-space: pre;"));
        assert!(css.contains("color: #1a1a1a;"));
        assert!(css.contains("-webkit-text-stroke: 1px #ffffff;"));
        assert!(css.contains("font: 13px sans-serif;"));
        assert!(css.contains("padding-left: 4px;"));
        assert!(css.contains("padding-bottom: 4px;"));
        assert!(css.contains("border-top-left-radius: 2px;"));
        assert!(css.contains("border-bottom-left-radius: 2px;"));
    }

    #[test]
    fn test_docked_zero_angle_has_no_rotation_rules() {
        let css = render_css(&compose_style(&docked(), 0.0, &metrics(), &plain_paint()));
        assert!(!css.contains("writing-mode"));
        assert!(!css.contains("transform"));
    }

    #[test]
    fn test_docked_nonzero_angle_switches_writing_mode() {
        let css = render_css(&compose_style(&docked(), 1.57, &metrics(), &plain_paint()));
        assert!(css.contains("writing-mode: vertical-rl;"));
        assert!(css.contains("rotate: 180deg;"));
        assert!(css.contains("align-self: end;"));
        // The angle value itself never appears; only non-zero is checked
        assert!(!css.contains("1.57"));
    }

    #[test]
    fn test_floating_zero_angle_still_emits_transform() {
        let css = render_css(&compose_style(&floating(), 0.0, &metrics(), &plain_paint()));
        assert!(css.contains("transform-origin: 0% 100%;"));
        assert!(css.contains("translate(-0%, -100%) rotate(0rad)"));
    }

    #[test]
    fn test_inactive_background_emits_nothing() {
        let css = render_css(&compose_style(&floating(), 0.0, &metrics(), &plain_paint()));
        assert!(!css.contains("background-color"));
    }

    #[test]
    fn test_active_background_emits_fill_color() {
        let mut paint = plain_paint();
        paint.background_fill = Some(FillPaint {
            color: "#fff8dc".to_string(),
        });
        let css = render_css(&compose_style(&floating(), 0.0, &metrics(), &paint));
        assert!(css.contains("background-color: #fff8dc;"));
    }

    #[test]
    fn test_active_border_emits_style_width_color() {
        let mut paint = plain_paint();
        paint.border_line = Some(LinePaint {
            color: "#444444".to_string(),
            width: 2.0,
            dash: vec![8.0, 4.0, 8.0],
        });
        let css = render_css(&compose_style(&docked(), 0.0, &metrics(), &paint));
        assert!(css.contains("border-style: dashed;"));
        assert!(css.contains("border-width: 2px;"));
        assert!(css.contains("border-color: #444444;"));
    }
}
