//! MAD8 survey/twiss decoder.
//!
//! MAD8 tables carry their kind in the `DATAVRSN` header key and use
//! 4-letter element keywords. The longitudinal coordinate is `Z` for
//! surveys and the cumulative length column `SUML` otherwise. MAD8
//! lattices start with a sentinel row whose keyword is blank; that row
//! (and only that row) is skipped.
//!
//! The native MAD8 binary "tape" reader stays an external collaborator;
//! [`read_mad8`] handles tables re-encoded in the TFS skeleton, and
//! [`mad8_table_to_beamline`] accepts any [`Table`] however it was read.

use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use lattice_types::{Beamline, Element};

use crate::error::{ReadError, Result};
use crate::table::Table;
use crate::tfs;

/// Read a TFS-encoded MAD8 file into a [`Beamline`].
///
/// # Errors
///
/// - [`ReadError::TfsFormat`] if the file lacks the TFS skeleton
/// - [`ReadError::MissingHeader`] if there is no `DATAVRSN` key
/// - [`ReadError::FileType`] if `DATAVRSN` is neither `SURVEY` nor `TWISS`
/// - [`ReadError::UnknownElementType`] for an unmapped keyword
pub fn read_mad8<P: AsRef<Path>>(path: P) -> Result<Beamline> {
    let table = tfs::read_tfs_file(path)?;
    mad8_table_to_beamline(&table)
}

/// Decode an already-read MAD8 table, dispatching on its `DATAVRSN` header.
///
/// # Errors
///
/// See [`read_mad8`].
pub fn mad8_table_to_beamline(table: &Table) -> Result<Beamline> {
    let file_type = table
        .header("DATAVRSN")
        .ok_or(ReadError::MissingHeader { key: "DATAVRSN" })?;

    let survey = match file_type {
        "SURVEY" => true,
        "TWISS" => false,
        other => return Err(ReadError::file_type("MAD8", other)),
    };

    decode(table, survey)
}

fn decode(table: &Table, survey: bool) -> Result<Beamline> {
    let mut elements = Vec::with_capacity(table.len());

    for (index, row) in table.rows().enumerate() {
        let keyword = row.text("KEYWORD")?;

        // Every MAD8 lattice opens with a blank sentinel row. Only the
        // first row gets this treatment; a blank keyword later in the
        // table is unmapped like any other.
        if keyword.is_empty() && index == 0 {
            continue;
        }

        let name = row.text("NAME")?.to_string();
        let length = row.number("L")?;

        let z = if survey {
            row.number("Z")?
        } else {
            row.number("SUML")?
        };
        let position = Point3::new(row.number("X")?, row.number("Y")?, z);

        let element = match keyword {
            "DRIF" => Element::drift(name, position, length),
            "RBEN" => Element::rbend(name, position, length, row.number("ANGLE")?),
            "SBEN" => Element::sbend(name, position, length, row.number("ANGLE")?),
            "QUAD" => Element::quadrupole(name, position, length, row.number("K1")?),
            "SEXT" => Element::sextupole(name, position, length, row.number("K2")?),
            // Octupoles land in the sextupole slot, as in the MAD-X path.
            "OCTU" => Element::sextupole(name, position, length, row.number("K3")?),
            "HKIC" => Element::hkicker(name, position, length, row.number("ANGLE")?),
            "VKIC" => Element::vkicker(name, position, length, row.number("ANGLE")?),
            "KICK" => Element::kicker(name, position, length, row.number("ANGLE")?),
            "MARK" => Element::marker(name, position),
            "MONI" => Element::monitor(name, position),
            "SOLE" => Element::solenoid(name, position, length, 0.0),
            "ECOL" => Element::collimator(name, position, length),
            "LCAV" => Element::cavity(name, position, length),
            "MATR" => Element::generic_map(name, position, length),
            other => return Err(ReadError::unknown_element(name, other)),
        };
        elements.push(element);
    }

    debug!(elements = elements.len(), survey, "decoded MAD8 table");
    Ok(Beamline::new(elements))
}
