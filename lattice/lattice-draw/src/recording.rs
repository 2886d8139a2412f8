//! In-memory canvas and figure doubles used by the unit tests.

use crate::canvas::{AnnotationId, Canvas, Figure, LineStyle, PatchId, RectSpec};

/// A recorded annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAnnotation {
    pub text: String,
    pub at: (f64, f64),
    pub visible: bool,
}

/// A canvas that records every drawing call verbatim.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub lines: Vec<(Vec<(f64, f64)>, LineStyle)>,
    pub rects: Vec<RectSpec>,
    pub annotations: Vec<RecordedAnnotation>,
    pub ylim: Option<(f64, f64)>,
    pub decorations_stripped: bool,
    pub redraws: usize,
}

impl Canvas for RecordingCanvas {
    fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        self.lines.push((points.to_vec(), style.clone()));
    }

    fn rect(&mut self, spec: &RectSpec) -> PatchId {
        self.rects.push(spec.clone());
        PatchId(self.rects.len() - 1)
    }

    fn annotate(&mut self, text: &str, at: (f64, f64), visible: bool) -> AnnotationId {
        self.annotations.push(RecordedAnnotation {
            text: text.to_string(),
            at,
            visible,
        });
        AnnotationId(self.annotations.len() - 1)
    }

    fn set_annotation_visible(&mut self, id: AnnotationId, visible: bool) {
        self.annotations[id.0].visible = visible;
    }

    fn annotation_visible(&self, id: AnnotationId) -> bool {
        self.annotations[id.0].visible
    }

    fn set_ylim(&mut self, low: f64, high: f64) {
        self.ylim = Some((low, high));
    }

    fn strip_decorations(&mut self) {
        self.decorations_stripped = true;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// A figure that hands out [`RecordingCanvas`] rows and remembers the
/// layout it was asked for.
#[derive(Debug, Default)]
pub struct RecordingFigure {
    pub height_ratios: Vec<f64>,
    pub hspace: f64,
}

impl Figure for RecordingFigure {
    type Axes = RecordingCanvas;

    fn subplots(&mut self, height_ratios: &[f64], hspace: f64) -> Vec<Self::Axes> {
        self.height_ratios = height_ratios.to_vec();
        self.hspace = hspace;
        height_ratios
            .iter()
            .map(|_| RecordingCanvas::default())
            .collect()
    }
}
