use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::table::TableError;

/// Errors produced while converting HTML into Typst table markup.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input contains no `<table>` element.
    #[error("No table found in clipboard content")]
    NoTableFound,

    /// The first `<table>` element has no rows.
    #[error("Table has no rows")]
    EmptyTable,

    /// Retrieving the HTML from the clipboard failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TableError> for ConvertError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NoRows => ConvertError::EmptyTable,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
