//! Callout - placement and styling resolver for chart text annotations
//!
//! Given a target point or a docked layout panel, a rotation angle and a
//! paint snapshot, this library decides where a floating text label goes
//! and how it is styled. The result is a pair of declarative CSS rule
//! blocks for a retained rendering surface; actual glyph rasterization,
//! panel layout and property validation stay with the chart host.
//!
//! # Example
//!
//! ```rust
//! use callout::geometry::{BBox, Point};
//! use callout::{paint, Annotation, MemorySurface, Placement, Theme};
//!
//! let note = Annotation::new("peak load");
//! let placement = Placement::Floating {
//!     anchor: Point::new(100.0, 50.0),
//!     frame: BBox::new(0.0, 0.0, 400.0, 300.0),
//! };
//!
//! let mut surface = MemorySurface::default();
//! paint(&note, &placement, &Theme::default().paint_state(), &mut surface);
//!
//! assert!(surface.visible);
//! assert!(surface.position.contains("left: 100px;"));
//! assert!(surface.style.contains("white-space: pre;"));
//! ```

pub mod anchor;
pub mod geometry;
pub mod log;
pub mod metrics;
pub mod placement;
pub mod render;
pub mod rules;
pub mod style;
pub mod theme;
pub mod visuals;

pub use anchor::{AnchorFraction, TextAlign, TextBaseline};
pub use metrics::{
    resolve_border_radius, resolve_padding, BorderRadius, BoxMetrics, Corners, Lrtb, Padding,
};
pub use placement::{Panel, Placement, Side, Size};
pub use render::{paint, Annotation, MemorySurface, Surface};
pub use rules::{render_css, Declaration, RuleBlock};
pub use style::compose_style;
pub use theme::{Theme, ThemeError};
pub use visuals::{FillPaint, LinePaint, PaintState, TextPaint};
