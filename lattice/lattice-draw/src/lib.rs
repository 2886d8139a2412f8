//! 2-D schematic rendering for beamlines.
//!
//! Draws a [`lattice_types::Beamline`] as a survey schematic - a
//! centerline trace with one coloured rectangle per element - onto any
//! backend implementing the [`Canvas`] trait, and lays out stacked
//! optics axes with thin lattice strips through the [`Figure`] trait.
//! Pick and key events from the backend's event loop are routed through
//! the [`Schematic`] handle returned by [`draw`].
//!
//! # Example
//!
//! ```
//! use lattice_draw::{draw, Canvas, SchematicStyle};
//! use lattice_types::{Beamline, Element};
//! use nalgebra::Point3;
//!
//! # struct NullCanvas(usize);
//! # impl Canvas for NullCanvas {
//! #     fn polyline(&mut self, _: &[(f64, f64)], _: &lattice_draw::LineStyle) {}
//! #     fn rect(&mut self, _: &lattice_draw::RectSpec) -> lattice_draw::PatchId {
//! #         self.0 += 1;
//! #         lattice_draw::PatchId(self.0 - 1)
//! #     }
//! #     fn annotate(&mut self, _: &str, _: (f64, f64), _: bool) -> lattice_draw::AnnotationId {
//! #         lattice_draw::AnnotationId(0)
//! #     }
//! #     fn set_annotation_visible(&mut self, _: lattice_draw::AnnotationId, _: bool) {}
//! #     fn annotation_visible(&self, _: lattice_draw::AnnotationId) -> bool { false }
//! #     fn set_ylim(&mut self, _: f64, _: f64) {}
//! #     fn strip_decorations(&mut self) {}
//! #     fn request_redraw(&mut self) {}
//! # }
//! let line = Beamline::new(vec![
//!     Element::drift("d1", Point3::new(0.0, 0.0, 1.0), 1.0),
//!     Element::quadrupole("qf", Point3::new(0.0, 0.0, 1.5), 0.5, 0.2),
//! ]);
//!
//! let mut canvas = NullCanvas(0);
//! let schematic = draw(&mut canvas, &line, &SchematicStyle::default())?;
//! assert_eq!(schematic.annotation_count(), 2);
//! # Ok::<(), lattice_draw::DrawError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod canvas;
mod color;
mod error;
mod layout;
#[cfg(test)]
mod recording;
mod schematic;

pub use canvas::{AnnotationId, Canvas, Figure, LineStyle, PatchId, RectSpec};
pub use color::{Color, ColorMap};
pub use error::{DrawError, Result};
pub use layout::{subplots_with_lattice, subplots_with_lattices, AxesStack};
pub use schematic::{draw, draw_centerline, Schematic, SchematicStyle, MAGNET_WIDTH};
