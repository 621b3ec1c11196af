//! Snapshot tests of the rendered CSS rule blocks
//!
//! The rule text is the crate's output contract with the host surface, so
//! regressions in formatting or declaration order show up here.

use callout::geometry::{BBox, Point};
use callout::{
    compose_style, render_css, BorderRadius, BoxMetrics, FillPaint, LinePaint, Padding,
    PaintState, Panel, Placement, Side, TextAlign, TextBaseline, TextPaint,
};

fn sample_paint() -> PaintState {
    PaintState {
        text: TextPaint {
            color: "#1a1a1a".to_string(),
            outline_color: "#ffffff".to_string(),
            font: "12px monospace".to_string(),
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
        },
        background_fill: Some(FillPaint {
            color: "#fffbe6".to_string(),
        }),
        border_line: Some(LinePaint {
            color: "#d0d0d0".to_string(),
            width: 1.0,
            dash: vec![4.0, 2.0],
        }),
    }
}

#[test]
fn test_floating_position_block() {
    let placement = Placement::Floating {
        anchor: Point::new(100.0, 50.0),
        frame: BBox::new(60.0, 40.0, 400.0, 300.0),
    };

    insta::assert_snapshot!(render_css(&placement.position_rules()), @r"
:host {
  position: absolute;
  left: 40px;
  top: 10px;
}
");
}

#[test]
fn test_docked_position_block() {
    let placement = Placement::Docked {
        panel: Panel::new(Side::Below),
    };

    insta::assert_snapshot!(render_css(&placement.position_rules()), @r"
:host {
  position: relative;
}
");
}

#[test]
fn test_docked_style_blocks_with_all_channels() {
    let placement = Placement::Docked {
        panel: Panel::new(Side::Below),
    };
    let metrics = BoxMetrics::resolve(Padding::Uniform(5.0), BorderRadius::Uniform(4.0));

    let css = render_css(&compose_style(&placement, 0.0, &metrics, &sample_paint()));

    insta::assert_snapshot!(css, @r"
:host {
  width: max-content;
  height: max-content;
  color: #1a1a1a;
  -webkit-text-stroke: 1px #ffffff;
  font: 12px monospace;
  white-space: pre;
  padding-left: 5px;
  padding-right: 5px;
  padding-top: 5px;
  padding-bottom: 5px;
  border-top-left-radius: 4px;
  border-top-right-radius: 4px;
  border-bottom-right-radius: 4px;
  border-bottom-left-radius: 4px;
}

:host {
  background-color: #fffbe6;
}

:host {
  border-style: dashed;
  border-width: 1px;
  border-color: #d0d0d0;
}
");
}

#[test]
fn test_floating_style_appends_anchor_transform() {
    let placement = Placement::Floating {
        anchor: Point::new(100.0, 50.0),
        frame: BBox::new(0.0, 0.0, 400.0, 300.0),
    };
    let metrics = BoxMetrics::resolve(Padding::default(), BorderRadius::default());
    let mut paint = sample_paint();
    paint.background_fill = None;
    paint.border_line = None;

    let css = render_css(&compose_style(&placement, 1.57, &metrics, &paint));

    insta::assert_snapshot!(css, @r"
:host {
  width: max-content;
  height: max-content;
  color: #1a1a1a;
  -webkit-text-stroke: 1px #ffffff;
  font: 12px monospace;
  white-space: pre;
  padding-left: 0px;
  padding-right: 0px;
  padding-top: 0px;
  padding-bottom: 0px;
  border-top-left-radius: 0px;
  border-top-right-radius: 0px;
  border-bottom-right-radius: 0px;
  border-bottom-left-radius: 0px;
}

:host {
  transform-origin: 50% 0%;
  transform: translate(-50%, -0%) rotate(1.57rad);
}
");
}
