//! Format decoders normalising lattice descriptions into beamlines.
//!
//! Accelerator codes describe the same machine in wildly different
//! tabular schemas: column names, units, coordinate conventions and
//! element-type vocabularies all differ. This crate maps each supported
//! source onto the single element model of `lattice-types`:
//!
//! - [`read_madx`] / [`madx_table_to_beamline`] - MAD-X TFS survey/twiss
//!   tables (`TYPE` header, dot-delimited names, cumulative `K1L`-style
//!   strengths)
//! - [`read_mad8`] / [`mad8_table_to_beamline`] - MAD8 tables
//!   (`DATAVRSN` header, 4-letter keywords, `SUML` path length)
//! - [`read_bdsim_survey`] - BDSIM whitespace survey dumps with bracketed
//!   unit suffixes and an optional "straighten" mode
//! - [`beamline_from_tracker`] - in-memory tracking-toolkit sequences via
//!   the explicit [`TrackerElement`] boundary
//! - [`read`] - auto-detecting front end over the two table formats
//!
//! Decoding is strict: an element keyword with no mapping is a hard
//! [`ReadError::UnknownElementType`], never silently dropped. Decoding is
//! also all-or-nothing; a failure partway through abandons the file.
//!
//! # Example
//!
//! ```
//! use lattice_io::{madx_table_to_beamline, Table};
//! use lattice_types::ElementTag;
//!
//! let mut table = Table::new(["NAME", "KEYWORD", "S", "L", "X", "Y"])
//!     .with_header("TYPE", "TWISS");
//! table.push_row(["D.1", "DRIFT", "1.0", "1.0", "0.0", "0.0"]).unwrap();
//!
//! let line = madx_table_to_beamline(&table).unwrap();
//! assert_eq!(line[0].tag(), ElementTag::Drift);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

mod bdsim;
mod error;
mod mad8;
mod madx;
mod table;
mod tfs;
mod tracker;

pub use bdsim::{bdsim_table_to_beamline, parse_bdsim_survey_str, read_bdsim_survey};
pub use error::{ReadError, Result};
pub use mad8::{mad8_table_to_beamline, read_mad8};
pub use madx::{
    madx_survey_to_beamline, madx_table_to_beamline, madx_twiss_to_beamline, read_madx,
};
pub use table::{Row, Table};
pub use tfs::{parse_tfs_str, read_tfs_file};
pub use tracker::{beamline_from_tracker, TrackerElement, TrackerKind};

use std::path::Path;

use lattice_types::Beamline;

/// Read a lattice table file, auto-detecting MAD-X vs MAD8.
///
/// Tries the MAD-X TFS reader first. If - and only if - that reader
/// reports [`ReadError::TfsFormat`] ("this is not that format"), the MAD8
/// reader is tried instead. Every other error propagates unchanged.
///
/// # Errors
///
/// Whatever the selected reader returns; see [`read_madx`] and
/// [`read_mad8`].
pub fn read<P: AsRef<Path>>(path: P) -> Result<Beamline> {
    let path = path.as_ref();
    match read_madx(path) {
        Err(ReadError::TfsFormat { .. }) => read_mad8(path),
        other => other,
    }
}
