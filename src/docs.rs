//! Detailed documentation for the input and output formats.
//!
//! This module contains reference documentation about the HTML accepted by
//! the converter and the Typst markup it produces.

/// # Input
///
/// ## HTML table
///
/// Any HTML document or fragment containing a `<table>` element, e.g. the
/// `text/html` flavor a browser or office suite puts on the clipboard.
///
/// - Only the first `<table>` in document order is converted; later tables are ignored.
/// - Rows are taken from `<thead>`, then `<tbody>` (or bare `<tr>`), then `<tfoot>`.
/// - Cells are `<td>` and `<th>` elements. Their text content is flattened and
///   trimmed; all other markup is dropped.
/// - `rowspan` and `colspan` are honored. A value that is not a positive
///   integer is read as 1.
///
/// ## Clipboard (`--clipboard`)
///
/// | OS      | Command                                                   |
/// |---------|-----------------------------------------------------------|
/// | macOS   | `osascript -e 'the clipboard as «class HTML»'`            |
/// | Windows | `powershell` reading `Clipboard.GetData(DataFormats.Html)` |
/// | Linux   | `xclip -selection clipboard -t text/html -o`, then `wl-paste --type text/html` |
pub mod input_types {
    /// Documentation for the HTML table input
    pub mod html_table {
        //! HTML `<table>` parser
    }

    /// Documentation for clipboard retrieval
    pub mod clipboard {
        //! Platform clipboard readers
    }
}

/// # Output
///
/// ## `typst_table`
///
/// The sample input used in this section is:
///
/// ```text
/// <table>
///   <tr><td>A</td><td colspan="2">B</td></tr>
///   <tr><td>C</td><td>D</td><td>E</td></tr>
/// </table>
/// ```
///
/// which is converted to:
///
/// ```text
/// #table(columns: 3,
///   [A], table.cell(colspan: 2, )[B],
///   [C], [D], [E],
/// )
/// ```
///
/// - `columns` is the sum of the column spans of the first row.
/// - A cell carrying `rowspan` and/or `colspan` is written as
///   `table.cell(rowspan: R, colspan: C, )[text]`, listing only the
///   attributes present in the source.
///
/// ### Options for `typst_table`
///
/// `--indent=<STRING>` : indentation before each row (default: two spaces)
/// `--preserve-whitespace` : keep whitespace runs inside cell text
pub mod output_types {
    /// Documentation for typst_table output format
    pub mod typst_table {
        //! Typst `#table` markup
    }
}
