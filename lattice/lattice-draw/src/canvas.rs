//! Abstract drawing surface.
//!
//! The renderer never talks to a concrete plotting toolkit. It draws
//! through the [`Canvas`] trait (one axes-like surface) and lays out
//! stacked axes through the [`Figure`] trait. A backend implements both
//! and owns its own event loop and redraw scheduling; [`Canvas::request_redraw`]
//! is a non-blocking hint, never a synchronous paint.

use crate::color::Color;

/// Opaque handle to a rectangle patch issued by a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatchId(pub usize);

/// Opaque handle to a text annotation issued by a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationId(pub usize);

/// Styling for a polyline trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Stroke width.
    pub width: f64,
    /// Stroke colour; `None` leaves the backend default.
    pub color: Option<Color>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: None,
        }
    }
}

/// A rectangle patch request.
///
/// `height` may be negative, in which case the rectangle extends
/// downwards from `y` (the matplotlib convention the survey schematics
/// rely on to encode magnet polarity).
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    /// Left edge.
    pub x: f64,
    /// Anchor edge (bottom for positive heights, top for negative).
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent; sign selects the growth direction.
    pub height: f64,
    /// Fill colour; `None` means no fill.
    pub face: Option<Color>,
    /// Edge colour; `None` means no stroke.
    pub edge: Option<Color>,
    /// Edge stroke width.
    pub line_width: f64,
    /// Opacity in `[0, 1]`; `0.0` renders the patch invisible.
    pub alpha: f64,
    /// Whether pointer picks should be reported for this patch.
    pub pickable: bool,
}

/// One axes-like drawing surface.
pub trait Canvas {
    /// Plot a polyline through `points` in data coordinates.
    fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle);

    /// Add a rectangle patch and return its handle.
    fn rect(&mut self, spec: &RectSpec) -> PatchId;

    /// Add a text annotation anchored at `at`, with initial visibility.
    fn annotate(&mut self, text: &str, at: (f64, f64), visible: bool) -> AnnotationId;

    /// Show or hide an annotation.
    fn set_annotation_visible(&mut self, id: AnnotationId, visible: bool);

    /// Current visibility of an annotation.
    fn annotation_visible(&self, id: AnnotationId) -> bool;

    /// Set the vertical data limits.
    fn set_ylim(&mut self, low: f64, high: f64);

    /// Hide ticks, tick labels and side spines, for lattice strip axes.
    fn strip_decorations(&mut self);

    /// Ask the backend to schedule a repaint. Must not block.
    fn request_redraw(&mut self);
}

/// A figure that can host a vertical stack of shared-x axes.
pub trait Figure {
    /// The axes type this figure produces.
    type Axes: Canvas;

    /// Create one axes row per entry of `height_ratios`, top to bottom,
    /// separated by `hspace`, sharing the horizontal axis.
    fn subplots(&mut self, height_ratios: &[f64], hspace: f64) -> Vec<Self::Axes>;
}
