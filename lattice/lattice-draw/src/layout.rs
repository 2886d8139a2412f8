//! Figure layout helpers: stacked data axes with lattice strips.
//!
//! Optics plots are conventionally stacked above or below a thin strip
//! showing the machine lattice at the same horizontal scale. These
//! helpers build that stack through the [`Figure`] trait and draw the
//! lattice strips, leaving the data rows untouched for the caller.

use lattice_types::Beamline;

use crate::canvas::{Canvas, Figure};
use crate::error::{DrawError, Result};
use crate::schematic::{self, Schematic, SchematicStyle};

/// Height ratio of a lattice strip relative to a data row.
const LATTICE_RATIO: f64 = 0.25;

/// Vertical gap between stacked axes.
const HSPACE: f64 = 0.05;

/// Vertical data range of a lattice strip.
const LATTICE_YLIM: (f64, f64) = (-0.25, 0.25);

/// A built axes stack: the rows top to bottom, plus the schematic
/// handle for every lattice strip keyed by its row index.
#[derive(Debug)]
pub struct AxesStack<A> {
    /// All axes rows, in the order of the layout pattern.
    pub axes: Vec<A>,
    /// `(row index, schematic)` for each lattice strip.
    pub schematics: Vec<(usize, Schematic)>,
}

/// Build a stack of axes from `pattern`, one row per entry, top to
/// bottom. A `Some(beamline)` entry becomes a thin lattice strip with
/// the schematic drawn into it; a `None` entry becomes a full-height
/// data row left empty for the caller.
///
/// # Errors
///
/// [`DrawError::Layout`] if the figure returns the wrong number of
/// axes, or any error from drawing a schematic.
pub fn subplots_with_lattices<F: Figure>(
    figure: &mut F,
    pattern: &[Option<&Beamline>],
) -> Result<AxesStack<F::Axes>> {
    let ratios: Vec<f64> = pattern
        .iter()
        .map(|row| if row.is_some() { LATTICE_RATIO } else { 1.0 })
        .collect();

    let mut axes = figure.subplots(&ratios, HSPACE);
    if axes.len() != pattern.len() {
        return Err(DrawError::layout(format!(
            "figure produced {} axes for a {}-row layout",
            axes.len(),
            pattern.len()
        )));
    }

    let mut schematics = Vec::new();
    for (index, row) in pattern.iter().enumerate() {
        let Some(beamline) = row else { continue };
        let canvas = &mut axes[index];
        let drawn = schematic::draw(canvas, beamline, &SchematicStyle::default())?;
        canvas.strip_decorations();
        canvas.set_ylim(LATTICE_YLIM.0, LATTICE_YLIM.1);
        schematics.push((index, drawn));
    }

    Ok(AxesStack { axes, schematics })
}

/// The common single-lattice layout: one lattice strip on top, then
/// `nrows` empty data rows beneath it.
///
/// # Errors
///
/// Same as [`subplots_with_lattices`].
pub fn subplots_with_lattice<F: Figure>(
    figure: &mut F,
    beamline: &Beamline,
    nrows: usize,
) -> Result<AxesStack<F::Axes>> {
    let mut pattern: Vec<Option<&Beamline>> = vec![Some(beamline)];
    pattern.extend(std::iter::repeat(None).take(nrows));
    subplots_with_lattices(figure, &pattern)
}
