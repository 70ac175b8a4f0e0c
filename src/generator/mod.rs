//! Output generators for table markup.
//!
//! This module contains generators that serialize the internal table
//! structure into a target markup grammar.

pub mod base;
pub mod typst_table;

pub use base::Generator;
pub use typst_table::{TypstTableGenerator, TypstTableGeneratorOptions};
