//! Beamline schematic rendering.
//!
//! A schematic is a centerline trace through the element end positions
//! plus one rectangle per element, sized by its length and coloured by
//! its kind. Elements exposing a signed strength (quadrupoles) get a
//! half-height patch anchored on the centerline whose direction encodes
//! the sign - focusing up, defocusing down. Unpowered magnets are drawn
//! washed out; kinds mapped to no colour are drawn fully transparent.

use std::collections::HashMap;

use tracing::debug;

use lattice_types::{Beamline, Element};

use crate::canvas::{AnnotationId, Canvas, LineStyle, PatchId, RectSpec};
use crate::color::{Color, ColorMap};
use crate::error::{DrawError, Result};

/// Nominal magnet half-width in the transverse (vertical) plot direction.
pub const MAGNET_WIDTH: f64 = 0.1;

/// Opacity used for magnets that report `is_powered() == false`.
const UNPOWERED_ALPHA: f64 = 0.25;

/// Vertical data range of the centerline axes.
const CENTERLINE_YLIM: (f64, f64) = (-3.0, 3.0);

/// Which transverse coordinate a schematic projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Projection {
    /// Horizontal plane: plot `position.x` against `position.z`.
    X,
    /// Vertical plane: plot `position.y` against `position.z`.
    Y,
}

impl Projection {
    /// Parse an axis selector. Anything but `"x"` or `"y"` is rejected
    /// outright, never defaulted.
    fn parse(axis: &str) -> Result<Self> {
        match axis {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(DrawError::unknown_projection(other)),
        }
    }

    fn transverse(self, element: &Element) -> f64 {
        match self {
            Self::X => element.position.x,
            Self::Y => element.position.y,
        }
    }
}

/// Appearance options for [`draw`].
#[derive(Debug, Clone, PartialEq)]
pub struct SchematicStyle {
    /// Kind-to-colour lookup for the element patches.
    pub color_map: ColorMap,
    /// Whether to create (hidden) per-element annotations.
    pub annotate: bool,
    /// Projection axis selector: `"x"` or `"y"`.
    pub projection: String,
    /// Nominal magnet half-width; patches default to four times this.
    pub magnet_width: f64,
    /// Styling for the centerline trace.
    pub centerline: LineStyle,
}

impl Default for SchematicStyle {
    fn default() -> Self {
        Self {
            color_map: ColorMap::default(),
            annotate: true,
            projection: "x".to_string(),
            magnet_width: MAGNET_WIDTH,
            centerline: LineStyle::default(),
        }
    }
}

/// A drawn schematic: the patch-to-annotation registry plus the two
/// interaction handlers the host event loop forwards events to.
///
/// The canvas owns the artists; this handle only remembers which
/// annotation belongs to which patch.
#[derive(Debug, Default)]
pub struct Schematic {
    annotations: HashMap<PatchId, AnnotationId>,
}

impl Schematic {
    /// Key that hides every annotation.
    pub const CLEAR_KEY: char = 'c';

    /// The annotation bound to `patch`, if any.
    #[must_use]
    pub fn annotation_for(&self, patch: PatchId) -> Option<AnnotationId> {
        self.annotations.get(&patch).copied()
    }

    /// Number of annotated patches.
    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Pick handler: toggle the annotation bound to the picked patch,
    /// then ask for a repaint. Picks on unannotated patches only repaint.
    pub fn on_pick<C: Canvas>(&self, canvas: &mut C, patch: PatchId) {
        if let Some(annotation) = self.annotation_for(patch) {
            let visible = canvas.annotation_visible(annotation);
            canvas.set_annotation_visible(annotation, !visible);
        }
        canvas.request_redraw();
    }

    /// Key-press handler: [`Self::CLEAR_KEY`] hides every annotation.
    /// Always asks for a repaint, matching the pick handler.
    pub fn on_key_press<C: Canvas>(&self, canvas: &mut C, key: char) {
        if key == Self::CLEAR_KEY {
            for &annotation in self.annotations.values() {
                canvas.set_annotation_visible(annotation, false);
            }
        }
        canvas.request_redraw();
    }
}

/// Draw only the centerline trace: the polyline of element end positions
/// projected onto the selected plane, with the y-range pinned to
/// [-3, 3].
///
/// # Errors
///
/// [`DrawError::UnknownProjection`] for an axis selector other than
/// `"x"` or `"y"`.
pub fn draw_centerline<C: Canvas>(
    canvas: &mut C,
    beamline: &Beamline,
    projection: &str,
    style: &LineStyle,
) -> Result<()> {
    let axis = Projection::parse(projection)?;

    let points: Vec<(f64, f64)> = beamline
        .iter()
        .map(|element| (element.position.z, axis.transverse(element)))
        .collect();

    canvas.polyline(&points, style);
    canvas.set_ylim(CENTERLINE_YLIM.0, CENTERLINE_YLIM.1);
    Ok(())
}

/// Draw a full schematic of `beamline` onto `canvas`.
///
/// Emits the centerline, one patch per element and (when
/// `style.annotate` is set) one initially-hidden annotation per patch,
/// returning the [`Schematic`] handle that routes pick/key events.
///
/// # Errors
///
/// [`DrawError::UnknownProjection`] for an axis selector other than
/// `"x"` or `"y"`; the centerline and patch paths enforce this
/// independently.
pub fn draw<C: Canvas>(
    canvas: &mut C,
    beamline: &Beamline,
    style: &SchematicStyle,
) -> Result<Schematic> {
    draw_centerline(canvas, beamline, &style.projection, &style.centerline)?;

    let mut schematic = Schematic::default();

    for element in beamline {
        // The patch path re-parses the selector rather than trusting the
        // centerline call above; an invalid axis must fail here too.
        let axis = Projection::parse(&style.projection)?;

        let z = element.position.z;
        let t = axis.transverse(element);
        let length = element.length;

        let color = style.color_map.color(element.tag());
        let mut alpha = 1.0;
        if !element.is_powered() {
            alpha = UNPOWERED_ALPHA;
        }
        if color.is_none() {
            alpha = 0.0;
        }

        // Default: a patch centred on the projected coordinate.
        let mut start = t - 2.0 * style.magnet_width;
        let mut height = 4.0 * style.magnet_width;

        // Strength-bearing elements: half height, anchored at the
        // coordinate, growing in the direction of the sign.
        if let Some(strength) = element.strength() {
            height = (height * 0.5).copysign(strength);
            start = t;
        }

        let patch = canvas.rect(&RectSpec {
            x: z - length,
            y: start,
            width: length,
            height,
            face: color,
            edge: Some(Color::WHITE),
            line_width: 0.1,
            alpha,
            pickable: style.annotate,
        });

        if style.annotate {
            let text = format!("{}: {}", element.tag().as_str(), element.name);
            let annotation = canvas.annotate(&text, (z, t), false);
            schematic.annotations.insert(patch, annotation);
        }
    }

    debug!(
        elements = beamline.len(),
        annotated = schematic.annotation_count(),
        "drew beamline schematic"
    );
    Ok(schematic)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use approx::assert_relative_eq;
    use lattice_types::Element;
    use nalgebra::Point3;

    fn demo_beamline() -> Beamline {
        Beamline::new(vec![
            Element::drift("d1", Point3::new(0.0, 0.5, 1.0), 1.0),
            Element::quadrupole("qf", Point3::new(0.0, 0.0, 1.5), 0.5, 0.2),
            Element::quadrupole("qd", Point3::new(0.0, 0.0, 2.5), 0.5, -0.2),
            Element::sbend("b1", Point3::new(0.0, 0.0, 4.5), 2.0, 0.0),
        ])
    }

    #[test]
    fn centerline_uses_selected_projection() {
        let line = demo_beamline();

        let mut canvas = RecordingCanvas::default();
        draw_centerline(&mut canvas, &line, "x", &LineStyle::default()).unwrap();
        let (points, _) = &canvas.lines[0];
        assert_eq!(points[0], (1.0, 0.0));

        let mut canvas = RecordingCanvas::default();
        draw_centerline(&mut canvas, &line, "y", &LineStyle::default()).unwrap();
        let (points, _) = &canvas.lines[0];
        assert_eq!(points[0], (1.0, 0.5));

        assert_eq!(canvas.ylim, Some((-3.0, 3.0)));
    }

    #[test]
    fn bad_projection_fails_in_both_paths() {
        let line = demo_beamline();

        let mut canvas = RecordingCanvas::default();
        assert!(matches!(
            draw_centerline(&mut canvas, &line, "z", &LineStyle::default()),
            Err(DrawError::UnknownProjection { .. })
        ));

        // The per-patch path must enforce the selector on its own: a style
        // whose centerline would succeed still fails per element.
        let style = SchematicStyle {
            projection: "s".to_string(),
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();
        assert!(matches!(
            draw(&mut canvas, &line, &style),
            Err(DrawError::UnknownProjection { .. })
        ));
    }

    #[test]
    fn patch_geometry_spans_element_length() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        // d1: end at z=1, length 1 -> patch from 0 to 1, centred default.
        let drift = &canvas.rects[0];
        assert_relative_eq!(drift.x, 0.0);
        assert_relative_eq!(drift.width, 1.0);
        assert_relative_eq!(drift.y, -2.0 * MAGNET_WIDTH);
        assert_relative_eq!(drift.height, 4.0 * MAGNET_WIDTH);
    }

    #[test]
    fn strength_sign_sets_patch_direction() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        // Focusing quadrupole: anchored at the coordinate, growing up.
        let qf = &canvas.rects[1];
        assert_relative_eq!(qf.y, 0.0);
        assert_relative_eq!(qf.height, 2.0 * MAGNET_WIDTH);

        // Defocusing quadrupole: anchored, growing down.
        let qd = &canvas.rects[2];
        assert_relative_eq!(qd.y, 0.0);
        assert_relative_eq!(qd.height, -2.0 * MAGNET_WIDTH);
    }

    #[test]
    fn hidden_kinds_are_fully_transparent() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        // Drifts map to no colour: invisible regardless of powered state.
        assert_relative_eq!(canvas.rects[0].alpha, 0.0);
        assert!(canvas.rects[0].face.is_none());
    }

    #[test]
    fn unpowered_magnets_are_washed_out() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        // b1 has angle 0 -> unpowered, but still blue.
        let bend = &canvas.rects[3];
        assert_relative_eq!(bend.alpha, UNPOWERED_ALPHA);
        assert_eq!(bend.face, Some(Color::BLUE));

        // Powered quadrupole: full opacity.
        assert_relative_eq!(canvas.rects[1].alpha, 1.0);
    }

    #[test]
    fn hidden_kind_beats_unpowered_alpha() {
        // An unpowered element whose kind maps to no colour must be fully
        // transparent, not washed out.
        let line = Beamline::new(vec![Element::sbend(
            "b0",
            Point3::new(0.0, 0.0, 2.0),
            2.0,
            0.0,
        )]);
        let style = SchematicStyle {
            color_map: ColorMap::empty(),
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &line, &style).unwrap();
        assert_relative_eq!(canvas.rects[0].alpha, 0.0);
    }

    #[test]
    fn annotations_start_hidden_and_toggle_on_pick() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        let schematic = draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        assert_eq!(schematic.annotation_count(), 4);
        assert!(canvas.annotations.iter().all(|a| !a.visible));
        assert_eq!(canvas.annotations[1].text, "Quadrupole: qf");

        let patch = PatchId(1);
        schematic.on_pick(&mut canvas, patch);
        let annotation = schematic.annotation_for(patch).unwrap();
        assert!(canvas.annotation_visible(annotation));
        assert_eq!(canvas.redraws, 1);

        schematic.on_pick(&mut canvas, patch);
        assert!(!canvas.annotation_visible(annotation));
        assert_eq!(canvas.redraws, 2);
    }

    #[test]
    fn clear_key_hides_all_annotations() {
        let line = demo_beamline();
        let mut canvas = RecordingCanvas::default();
        let schematic = draw(&mut canvas, &line, &SchematicStyle::default()).unwrap();

        schematic.on_pick(&mut canvas, PatchId(0));
        schematic.on_pick(&mut canvas, PatchId(2));

        schematic.on_key_press(&mut canvas, Schematic::CLEAR_KEY);
        assert!(canvas.annotations.iter().all(|a| !a.visible));

        // Any other key only requests a repaint.
        let redraws = canvas.redraws;
        schematic.on_key_press(&mut canvas, 'q');
        assert_eq!(canvas.redraws, redraws + 1);
    }

    #[test]
    fn annotate_false_registers_nothing() {
        let line = demo_beamline();
        let style = SchematicStyle {
            annotate: false,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();
        let schematic = draw(&mut canvas, &line, &style).unwrap();

        assert_eq!(schematic.annotation_count(), 0);
        assert!(canvas.annotations.is_empty());
        assert!(canvas.rects.iter().all(|r| !r.pickable));
    }
}
