//! Error types for lattice decoding.

use thiserror::Error;

/// Result type for lattice decoding operations.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading and decoding lattice tables.
///
/// Every variant is fatal to the decode in progress: decoding is
/// all-or-nothing per file and nothing is retried. The single exception is
/// [`ReadError::TfsFormat`], which the auto-detecting [`crate::read`]
/// entry point treats as "this is not a MAD-X TFS file" and uses to fall
/// back to the MAD8 reader.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file does not carry the TFS table skeleton.
    #[error("not a TFS table: {message}")]
    TfsFormat {
        /// What was missing or malformed.
        message: String,
    },

    /// A header tag was present but named an unsupported table kind.
    #[error("unsupported {format} table kind in header: {tag}")]
    FileType {
        /// The source format that rejected the tag.
        format: &'static str,
        /// The offending header value.
        tag: String,
    },

    /// A row or object carried a type keyword with no mapping to an
    /// element kind. Never recovered locally; always surfaces to the
    /// caller with the offending name and keyword attached.
    #[error("unknown element type: name={name}, keyword={keyword}")]
    UnknownElementType {
        /// Name of the offending element.
        name: String,
        /// The raw keyword that had no mapping.
        keyword: String,
    },

    /// A decoder asked for a column the table does not have.
    #[error("missing column: {column}")]
    MissingColumn {
        /// The absent column name.
        column: String,
    },

    /// A decoder asked for a header key the table does not have.
    #[error("missing header key: {key}")]
    MissingHeader {
        /// The absent header key.
        key: &'static str,
    },

    /// A row's cell count disagreed with the table's column count.
    #[error("row has {got} cells but the table defines {expected} columns")]
    RowShape {
        /// Number of columns the table defines.
        expected: usize,
        /// Number of cells the row carried.
        got: usize,
    },

    /// A cell could not be parsed as a number.
    #[error("cannot parse {value:?} in column {column} as a number")]
    ParseNumber {
        /// Column the cell belongs to.
        column: String,
        /// The raw cell text.
        value: String,
    },

    /// A file was structurally malformed for its format.
    #[error("malformed {format} file: {message}")]
    Malformed {
        /// The format being parsed.
        format: &'static str,
        /// What was wrong.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Create a `TfsFormat` error with the given message.
    #[must_use]
    pub fn tfs_format(message: impl Into<String>) -> Self {
        Self::TfsFormat {
            message: message.into(),
        }
    }

    /// Create a `FileType` error for `format` with the offending `tag`.
    #[must_use]
    pub fn file_type(format: &'static str, tag: impl Into<String>) -> Self {
        Self::FileType {
            format,
            tag: tag.into(),
        }
    }

    /// Create an `UnknownElementType` error.
    #[must_use]
    pub fn unknown_element(name: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self::UnknownElementType {
            name: name.into(),
            keyword: keyword.into(),
        }
    }

    /// Create a `MissingColumn` error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a `Malformed` error for `format`.
    #[must_use]
    pub fn malformed(format: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            message: message.into(),
        }
    }
}
