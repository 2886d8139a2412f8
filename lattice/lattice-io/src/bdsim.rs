//! BDSIM survey dump decoder.
//!
//! BDSIM writes surveys as whitespace-delimited text: one preamble line,
//! a header row whose column names carry unit annotations (`SEnd[m]`),
//! the data rows, and a two-line summary footer. Column names are
//! normalised by discarding everything from the first `[`.
//!
//! Transport artifacts such as dipole fringe fields appear as rows of
//! their own; those types are skipped wholesale rather than mapped.
//!
//! The `straighten` flag renders an idealised straight machine: transverse
//! coordinates are forced to `(0, 0)` and the longitudinal coordinate is
//! taken from the cumulative end length `SEnd` instead of the survey `Z`.

use std::fs;
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use lattice_types::{Beamline, Element};

use crate::error::{ReadError, Result};
use crate::table::Table;

/// Row types that are transport artifacts, not beamline elements.
const IGNORED_TYPES: [&str; 1] = ["dipolefringe"];

/// Read a BDSIM survey file into a [`Beamline`].
///
/// # Errors
///
/// - [`ReadError::Malformed`] if the file is too short to carry the
///   preamble/header/footer structure
/// - [`ReadError::UnknownElementType`] for an unmapped type name
pub fn read_bdsim_survey<P: AsRef<Path>>(path: P, straighten: bool) -> Result<Beamline> {
    let text = fs::read_to_string(path.as_ref())?;
    let table = parse_bdsim_survey_str(&text)?;
    debug!(
        path = %path.as_ref().display(),
        rows = table.len(),
        straighten,
        "read BDSIM survey"
    );
    bdsim_table_to_beamline(&table, straighten)
}

/// Parse BDSIM survey text into a [`Table`], stripping unit annotations
/// from the column headers.
///
/// # Errors
///
/// Returns [`ReadError::Malformed`] if the preamble, header row or footer
/// is missing.
pub fn parse_bdsim_survey_str(text: &str) -> Result<Table> {
    let lines: Vec<&str> = text.lines().collect();

    // One preamble line + header row + two footer lines.
    if lines.len() < 4 {
        return Err(ReadError::malformed(
            "BDSIM survey",
            format!("expected preamble, header and footer; got {} lines", lines.len()),
        ));
    }

    let header = lines[1];
    let columns = header
        .split_whitespace()
        .map(|name| name.split('[').next().unwrap_or(name));
    let mut table = Table::new(columns);

    for line in &lines[2..lines.len() - 2] {
        if line.trim().is_empty() {
            continue;
        }
        table.push_row(line.split_whitespace())?;
    }

    Ok(table)
}

/// Decode an already-parsed BDSIM survey table.
///
/// # Errors
///
/// See [`read_bdsim_survey`].
pub fn bdsim_table_to_beamline(table: &Table, straighten: bool) -> Result<Beamline> {
    let mut elements = Vec::with_capacity(table.len());

    for row in table.rows() {
        let name = row.text("Name")?.to_string();
        let length = row.number("ChordLength")?;

        let position = if straighten {
            Point3::new(0.0, 0.0, row.number("SEnd")?)
        } else {
            Point3::new(row.number("X")?, row.number("Y")?, row.number("Z")?)
        };

        let keyword = row.text("Type")?;
        if IGNORED_TYPES.contains(&keyword) {
            continue;
        }

        let element = match keyword {
            "drift" => Element::drift(name, position, length),
            "rbend" => Element::rbend(name, position, length, row.number("Angle")?),
            "sbend" => Element::sbend(name, position, length, row.number("Angle")?),
            "quadrupole" => Element::quadrupole(name, position, length, row.number("k1")?),
            // "sextupol" is what the dump actually writes.
            "sextupol" => Element::sextupole(name, position, length, row.number("k2")?),
            // Octupoles land in the sextupole slot, as in the MAD-X path.
            "octupole" => Element::sextupole(name, position, length, row.number("k3")?),
            "hkicker" => Element::hkicker(name, position, length, row.number("Angle")?),
            "vkicker" => Element::vkicker(name, position, length, row.number("Angle")?),
            "kicker" => Element::kicker(name, position, length, row.number("Angle")?),
            other => return Err(ReadError::unknown_element(name, other)),
        };
        elements.push(element);
    }

    Ok(Beamline::new(elements))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lattice_types::{ElementKind, ElementTag};

    const COLUMNS: [&str; 10] = [
        "Name", "Type", "SEnd", "ChordLength", "X", "Y", "Z", "Angle", "k1", "k2",
    ];

    fn table() -> Table {
        let mut columns: Vec<&str> = COLUMNS.to_vec();
        columns.push("k3");
        Table::new(columns)
    }

    fn push(t: &mut Table, cells: &[&str]) {
        t.push_row(cells.iter().copied()).unwrap();
    }

    #[test]
    fn header_units_are_stripped() {
        let text = "\
! BDSIM survey, generated\n\
Name Type SEnd[m] ChordLength[m] X[m] Y[m] Z[m] Angle[rad] k1[m^-2] k2[m^-3] k3[m^-4]\n\
d1 drift 1.0 1.0 0.1 0.2 0.9 0 0 0 0\n\
TOTAL ARC LENGTH = 1.0\n\
TOTAL ANGLE = 0.0\n";

        let parsed = parse_bdsim_survey_str(text).unwrap();
        assert_eq!(parsed.columns()[2], "SEnd");
        assert_eq!(parsed.len(), 1);

        let line = bdsim_table_to_beamline(&parsed, false).unwrap();
        assert_eq!(line.len(), 1);
        assert_relative_eq!(line[0].position.z, 0.9);
    }

    #[test]
    fn truncated_file_is_malformed() {
        assert!(matches!(
            parse_bdsim_survey_str("just\ntwo lines?\n"),
            Err(ReadError::Malformed { .. })
        ));
    }

    #[test]
    fn keyword_identity_mapping() {
        let mut t = table();
        push(
            &mut t,
            &["d1", "drift", "1.0", "1.0", "0", "0", "1.0", "0", "0", "0", "0"],
        );
        push(
            &mut t,
            &["qf", "quadrupole", "1.5", "0.5", "0", "0", "1.5", "0", "0.2", "0", "0"],
        );
        push(
            &mut t,
            &["sx", "sextupol", "2.0", "0.5", "0", "0", "2.0", "0", "0", "1.5", "0"],
        );
        push(
            &mut t,
            &["oc", "octupole", "2.5", "0.5", "0", "0", "2.5", "0", "0", "0", "7.0"],
        );
        push(
            &mut t,
            &["kv", "vkicker", "2.5", "0.0", "0", "0", "2.5", "0.001", "0", "0", "0"],
        );

        let line = bdsim_table_to_beamline(&t, false).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0].tag(), ElementTag::Drift);
        assert_eq!(line[1].kind, ElementKind::Quadrupole { k1: 0.2 });
        assert_eq!(line[2].kind, ElementKind::Sextupole { k2: 1.5 });
        // Characterization: octupoles decode into the sextupole slot.
        assert_eq!(line[3].kind, ElementKind::Sextupole { k2: 7.0 });
        assert_eq!(line[4].kind, ElementKind::VKicker { angle: 0.001 });
    }

    #[test]
    fn ignored_types_produce_no_element_and_no_error() {
        let mut t = table();
        push(
            &mut t,
            &["d1", "drift", "1.0", "1.0", "0", "0", "1.0", "0", "0", "0", "0"],
        );
        push(
            &mut t,
            &["fr", "dipolefringe", "1.0", "0.0", "0", "0", "1.0", "0", "0", "0", "0"],
        );
        push(
            &mut t,
            &["b1", "sbend", "3.0", "2.0", "0", "0", "3.0", "0.05", "0", "0", "0"],
        );

        let line = bdsim_table_to_beamline(&t, false).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line[0].name, "d1");
        assert_eq!(line[1].name, "b1");
    }

    #[test]
    fn straighten_forces_transverse_zero_and_uses_send() {
        let mut t = table();
        push(
            &mut t,
            &["b1", "sbend", "2.0", "2.0", "0.3", "0.4", "1.9", "0.05", "0", "0", "0"],
        );
        push(
            &mut t,
            &["d1", "drift", "3.0", "1.0", "0.5", "0.6", "2.8", "0", "0", "0", "0"],
        );

        let line = bdsim_table_to_beamline(&t, true).unwrap();
        for element in &line {
            assert_relative_eq!(element.position.x, 0.0);
            assert_relative_eq!(element.position.y, 0.0);
        }
        assert_relative_eq!(line[0].position.z, 2.0);
        assert_relative_eq!(line[1].position.z, 3.0);
    }

    #[test]
    fn unknown_type_is_a_hard_error() {
        let mut t = table();
        push(
            &mut t,
            &["w1", "wiggler", "1.0", "1.0", "0", "0", "1.0", "0", "0", "0", "0"],
        );
        match bdsim_table_to_beamline(&t, false) {
            Err(ReadError::UnknownElementType { name, keyword }) => {
                assert_eq!(name, "w1");
                assert_eq!(keyword, "wiggler");
            }
            other => panic!("expected UnknownElementType, got {other:?}"),
        }
    }
}
