//! Convert an HTML table, typically copied to the clipboard, into the source
//! of a Typst `#table(...)` call.
//!
//! ```
//! let markup = html2typst_table::convert_html_to_typst(
//!     r#"<table><tr><td>A</td><td colspan="2">B</td></tr></table>"#,
//! )
//! .unwrap();
//! assert_eq!(markup, "#table(columns: 3,\n  [A], table.cell(colspan: 2, )[B], \n)");
//! ```

pub mod cli;
pub mod clipboard;
pub mod docs;
pub mod error;
pub mod generator;
pub mod parser;
pub mod table;

pub use error::{ConvertError, Result};

use clipboard::ClipboardSource;
use generator::{TypstTableGenerator, TypstTableGeneratorOptions};
use parser::{HtmlTableParser, HtmlTableParserOptions};

/// Converts the first table of `html` into Typst markup using default options.
pub fn convert_html_to_typst(html: &str) -> Result<String> {
    convert_html_to_typst_with(
        html,
        &HtmlTableParserOptions::default(),
        &TypstTableGeneratorOptions::default(),
    )
}

/// Converts the first table of `html` into Typst markup.
///
/// Fails with [`ConvertError::NoTableFound`] when `html` has no `<table>`.
pub fn convert_html_to_typst_with(
    html: &str,
    parser_options: &HtmlTableParserOptions,
    generator_options: &TypstTableGeneratorOptions,
) -> Result<String> {
    let table = HtmlTableParser::new(parser_options.clone()).parse(html)?;
    let generator = TypstTableGenerator::new(table, generator_options.clone());
    Ok(generator.to_markup())
}

/// Reads HTML from `source` and converts it with default options.
/// Clipboard failures are returned as [`ConvertError::Clipboard`].
pub fn convert_clipboard(source: &dyn ClipboardSource) -> Result<String> {
    let html = source.retrieve()?;
    convert_html_to_typst(&html)
}
