//! Typed accelerator-lattice element model for schematic drawing.
//!
//! This crate defines the unified element model that the per-format
//! decoders in `lattice-io` normalise into, and the [`Beamline`]
//! container that the `lattice-draw` renderer consumes:
//!
//! - [`Element`] - name, end position, length and an [`ElementKind`]
//!   payload (bend angle, quadrupole gradient, ...)
//! - [`ElementTag`] - payload-free kind discriminant, used as a lookup key
//! - [`Beamline`] - ordered, fixed-length element sequence with a single
//!   bulk-translation mutation
//!
//! # Layer 0
//!
//! Zero I/O and zero rendering dependencies; this crate is pure data.
//!
//! # Example
//!
//! ```
//! use lattice_types::{Beamline, Element};
//! use nalgebra::Point3;
//!
//! let line = Beamline::new(vec![
//!     Element::drift("d1", Point3::new(0.0, 0.0, 1.0), 1.0),
//!     Element::quadrupole("qf", Point3::new(0.0, 0.0, 1.5), 0.5, 0.2),
//! ]);
//!
//! assert_eq!(line.len(), 2);
//! assert_eq!(line[1].strength(), Some(0.2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod beamline;
mod element;

pub use beamline::Beamline;
pub use element::{Element, ElementKind, ElementTag, ALL_TAGS};
