//! Input parsers that build a [`Table`](crate::table::Table) from source text.

pub mod html_table;

pub use html_table::{HtmlTableParser, HtmlTableParserOptions};
