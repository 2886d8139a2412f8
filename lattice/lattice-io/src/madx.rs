//! MAD-X TFS survey/twiss decoder.
//!
//! Decodes a MAD-X TFS table (see [`crate::tfs`]) into a [`Beamline`].
//! The table kind comes from the `TYPE` header: `SURVEY` tables carry
//! absolute 3-D positions with the longitudinal coordinate in `Z`;
//! `TWISS` tables carry the cumulative path length in `S` instead.
//!
//! In twiss mode the table stores *cumulative* multipole strengths
//! (`K1L`, `K2L`, `K3L`); per-length strengths are derived by dividing by
//! the element length. A zero-length multipole therefore divides by zero
//! and the IEEE infinity/NaN propagates into the element, as it did in
//! every producer of these files; a warning is logged instead of guarding.

use std::path::Path;

use nalgebra::Point3;
use tracing::{debug, warn};

use lattice_types::{Beamline, Element};

use crate::error::{ReadError, Result};
use crate::table::{Row, Table};
use crate::tfs;

/// Read a MAD-X TFS file into a [`Beamline`].
///
/// # Errors
///
/// - [`ReadError::TfsFormat`] if the file is not a TFS table (or carries
///   no `TYPE` header) - the signal [`crate::read`] falls back on
/// - [`ReadError::FileType`] if `TYPE` is neither `SURVEY` nor `TWISS`
/// - [`ReadError::UnknownElementType`] for an unmapped keyword
pub fn read_madx<P: AsRef<Path>>(path: P) -> Result<Beamline> {
    let table = tfs::read_tfs_file(path)?;
    madx_table_to_beamline(&table)
}

/// Decode an already-read MAD-X table, dispatching on its `TYPE` header.
///
/// # Errors
///
/// See [`read_madx`].
pub fn madx_table_to_beamline(table: &Table) -> Result<Beamline> {
    let file_type = table
        .header("TYPE")
        .ok_or_else(|| ReadError::tfs_format("no TYPE key in header; not a MAD-X table"))?;

    let survey = match file_type {
        "SURVEY" => true,
        "TWISS" => false,
        other => return Err(ReadError::file_type("TFS", other)),
    };

    decode(table, survey)
}

/// Decode a MAD-X survey table, skipping the `TYPE` header check.
///
/// # Errors
///
/// See [`read_madx`].
pub fn madx_survey_to_beamline(table: &Table) -> Result<Beamline> {
    decode(table, true)
}

/// Decode a MAD-X twiss table, skipping the `TYPE` header check.
///
/// # Errors
///
/// See [`read_madx`].
pub fn madx_twiss_to_beamline(table: &Table) -> Result<Beamline> {
    decode(table, false)
}

#[allow(clippy::float_cmp)]
fn decode(table: &Table, survey: bool) -> Result<Beamline> {
    let mut elements = Vec::with_capacity(table.len());

    for row in table.rows() {
        let name = row.text("NAME")?.to_string();
        let length = row.number("L")?;

        let z = if survey {
            row.number("Z")?
        } else {
            row.number("S")?
        };
        let position = Point3::new(row.number("X")?, row.number("Y")?, z);

        let keyword = row.text("KEYWORD")?;

        let (k1, k2, k3) = if !survey && keyword.ends_with("POLE") {
            if length == 0.0 {
                warn!(
                    name = %name,
                    keyword = %keyword,
                    "zero-length multipole: per-length strength divides by zero"
                );
            }
            (
                row.number("K1L")? / length,
                row.number("K2L")? / length,
                row.number("K3L")? / length,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let element = match keyword {
            "DRIFT" => Element::drift(name, position, length),
            "RBEND" => Element::rbend(name, position, length, angle(&row)?),
            "SBEND" => Element::sbend(name, position, length, angle(&row)?),
            "QUADRUPOLE" => Element::quadrupole(name, position, length, k1),
            "SEXTUPOLE" => Element::sextupole(name, position, length, k2),
            // Keyword-table quirk kept from the reference data flow:
            // octupoles land in the sextupole slot, carrying k3.
            "OCTUPOLE" => Element::sextupole(name, position, length, k3),
            "HKICKER" => Element::hkicker(name, position, length, angle(&row)?),
            "VKICKER" => Element::vkicker(name, position, length, angle(&row)?),
            "KICKER" => Element::kicker(name, position, length, angle(&row)?),
            "MARKER" => Element::marker(name, position),
            "MONITOR" => Element::monitor(name, position),
            other => return Err(ReadError::unknown_element(name, other)),
        };
        elements.push(element);
    }

    debug!(
        elements = elements.len(),
        survey, "decoded MAD-X table"
    );
    Ok(Beamline::new(elements))
}

fn angle(row: &Row<'_>) -> Result<f64> {
    row.number("ANGLE")
}
