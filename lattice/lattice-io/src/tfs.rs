//! TFS (Table File System) text format reader.
//!
//! TFS is the self-describing table format emitted by MAD-X (and by MAD8
//! converters). The skeleton is line-oriented:
//!
//! ```text
//! @ TYPE             %s  "TWISS"
//! @ SEQUENCE         %s  "RING"
//! * NAME  KEYWORD  S       L       ...
//! $ %s    %s       %le     %le     ...
//!  "QF.1" "QUADRUPOLE" 1.5 0.5     ...
//! ```
//!
//! - `@` lines are header key/type/value triples
//! - the single `*` line names the columns
//! - the `$` line gives column types (read and discarded here)
//! - every other non-empty line is a whitespace-separated data row
//!
//! A file without this skeleton fails with [`ReadError::TfsFormat`], the
//! one error the auto-detecting reader recovers from.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReadError, Result};
use crate::table::Table;

/// Read a TFS file into a [`Table`].
///
/// # Errors
///
/// Returns [`ReadError::Io`] if the file cannot be read and
/// [`ReadError::TfsFormat`] if the content lacks the TFS skeleton.
pub fn read_tfs_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    let text = fs::read_to_string(path.as_ref())?;
    let table = parse_tfs_str(&text)?;
    debug!(
        path = %path.as_ref().display(),
        rows = table.len(),
        "read TFS table"
    );
    Ok(table)
}

/// Parse TFS text into a [`Table`].
///
/// # Errors
///
/// Returns [`ReadError::TfsFormat`] if the content lacks the TFS skeleton
/// and [`ReadError::RowShape`] if a data row disagrees with the column
/// line.
pub fn parse_tfs_str(text: &str) -> Result<Table> {
    let mut pending_headers: Vec<(String, String)> = Vec::new();
    let mut table: Option<Table> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.as_bytes()[0] {
            b'@' => {
                let (key, value) = parse_header_line(trimmed)?;
                match table.as_mut() {
                    Some(t) => t.set_header(key, value),
                    None => pending_headers.push((key, value)),
                }
            }
            b'*' => {
                if table.is_some() {
                    return Err(ReadError::tfs_format("duplicate column definition line"));
                }
                let columns: Vec<&str> = trimmed[1..].split_whitespace().collect();
                if columns.is_empty() {
                    return Err(ReadError::tfs_format("empty column definition line"));
                }
                let mut t = Table::new(columns);
                for (key, value) in pending_headers.drain(..) {
                    t.set_header(key, value);
                }
                table = Some(t);
            }
            // Column type line; types are not needed for decoding.
            b'$' => {}
            _ => {
                let Some(t) = table.as_mut() else {
                    return Err(ReadError::tfs_format(
                        "data row before any column definition line",
                    ));
                };
                t.push_row(trimmed.split_whitespace().map(unquote))?;
            }
        }
    }

    table.ok_or_else(|| ReadError::tfs_format("no column definition line"))
}

/// Split an `@ KEY %type value` header line into key and unquoted value.
fn parse_header_line(line: &str) -> Result<(String, String)> {
    let mut tokens = line[1..].split_whitespace();
    let key = tokens
        .next()
        .ok_or_else(|| ReadError::tfs_format("header line without a key"))?;
    let _type_token = tokens
        .next()
        .ok_or_else(|| ReadError::tfs_format(format!("header {key} without a type token")))?;
    // The value may contain spaces when quoted; keep the remainder intact.
    let value = tokens.collect::<Vec<_>>().join(" ");
    Ok((key.to_string(), unquote(&value).to_string()))
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SMALL_TFS: &str = r#"
@ TYPE     %s   "TWISS"
@ SEQUENCE %s   "RING"
@ CHARGE   %le  1.0
* NAME  KEYWORD       S     L
$ %s    %s            %le   %le
 "D.1"  "DRIFT"       1.0   1.0
 "QF.1" "QUADRUPOLE"  1.5   0.5
"#;

    #[test]
    fn parses_headers_columns_and_rows() {
        let table = parse_tfs_str(SMALL_TFS).unwrap();
        assert_eq!(table.header("TYPE"), Some("TWISS"));
        assert_eq!(table.header("SEQUENCE"), Some("RING"));
        assert_eq!(table.header("CHARGE"), Some("1.0"));
        assert_eq!(table.columns(), ["NAME", "KEYWORD", "S", "L"]);
        assert_eq!(table.len(), 2);

        let row = table.rows().nth(1).unwrap();
        assert_eq!(row.text("NAME").unwrap(), "QF.1");
        assert_eq!(row.text("KEYWORD").unwrap(), "QUADRUPOLE");
        assert_relative_eq!(row.number("S").unwrap(), 1.5);
    }

    #[test]
    fn non_tfs_text_is_a_format_error() {
        let result = parse_tfs_str("Name Type SStart\n d1 drift 0.0\n");
        assert!(matches!(result, Err(ReadError::TfsFormat { .. })));
    }

    #[test]
    fn empty_input_is_a_format_error() {
        assert!(matches!(
            parse_tfs_str(""),
            Err(ReadError::TfsFormat { .. })
        ));
    }

    #[test]
    fn data_row_before_columns_is_a_format_error() {
        let result = parse_tfs_str("@ TYPE %s \"TWISS\"\n1.0 2.0\n");
        assert!(matches!(result, Err(ReadError::TfsFormat { .. })));
    }

    #[test]
    fn row_with_wrong_cell_count_is_not_a_format_error() {
        // A malformed TFS file must not trigger the MAD8 fallback.
        let result = parse_tfs_str("* A B\n$ %le %le\n1.0\n");
        assert!(matches!(result, Err(ReadError::RowShape { .. })));
    }

    #[test]
    fn unquote_only_strips_matched_quotes() {
        assert_eq!(unquote("\"QF\""), "QF");
        assert_eq!(unquote("QF"), "QF");
        assert_eq!(unquote("\"QF"), "\"QF");
    }
}
