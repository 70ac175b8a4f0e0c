use std::fmt::Write as _;
use std::io::Write;

use clap::Args;

use super::base::Generator;
use crate::table::{Table, TableCell};

#[derive(Debug, Clone, Args)]
pub struct TypstTableGeneratorOptions {
    /// Indentation written before each row of cells.
    #[arg(long, default_value = "  ")]
    pub indent: String,
}

impl Default for TypstTableGeneratorOptions {
    fn default() -> Self {
        TypstTableGeneratorOptions {
            indent: "  ".to_string(),
        }
    }
}

/// Serializes a `Table` into a Typst `#table(...)` call.
///
/// ```text
/// #table(columns: 3,
///   [A], table.cell(colspan: 2, )[B],
///   [C], [D], [E],
/// )
/// ```
pub struct TypstTableGenerator {
    table: Table,
    options: TypstTableGeneratorOptions,
}

impl TypstTableGenerator {
    pub fn new(table: Table, options: TypstTableGeneratorOptions) -> Self {
        TypstTableGenerator { table, options }
    }

    /// Builds the complete markup in memory.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "#table(columns: {},", self.table.column_count());

        for row in &self.table.rows {
            out.push_str(&self.options.indent);
            for cell in &row.cells {
                push_cell(&mut out, cell);
                out.push_str(", ");
            }
            out.push('\n');
        }

        out.push(')');
        out
    }
}

impl Generator for TypstTableGenerator {
    fn output(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writer.write_all(self.to_markup().as_bytes())
    }
}

fn push_cell(out: &mut String, cell: &TableCell) {
    if cell.is_spanning() {
        out.push_str("table.cell(");
        if let Some(rowspan) = cell.rowspan {
            let _ = write!(out, "rowspan: {}, ", rowspan);
        }
        if let Some(colspan) = cell.colspan {
            let _ = write!(out, "colspan: {}, ", colspan);
        }
        out.push(')');
    }
    out.push('[');
    out.push_str(&cell.text);
    out.push(']');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableRow;

    fn generate(table: Table) -> String {
        TypstTableGenerator::new(table, TypstTableGeneratorOptions::default()).to_markup()
    }

    fn single_row(cells: Vec<TableCell>) -> Table {
        let mut table = Table::new();
        table.add_row(TableRow { cells });
        table
    }

    #[test]
    fn test_plain_cells() {
        let table = single_row(vec![
            TableCell::new("A", None, None),
            TableCell::new("B", None, None),
        ]);

        assert_eq!(generate(table), "#table(columns: 2,\n  [A], [B], \n)");
    }

    #[test]
    fn test_spanning_cells() {
        let table = single_row(vec![
            TableCell::new("R", Some(2), None),
            TableCell::new("C", None, Some(3)),
            TableCell::new("RC", Some(2), Some(3)),
        ]);
        let markup = generate(table);

        assert!(markup.starts_with("#table(columns: 7,\n"));
        assert!(markup.contains("table.cell(rowspan: 2, )[R], "));
        assert!(markup.contains("table.cell(colspan: 3, )[C], "));
        assert!(markup.contains("table.cell(rowspan: 2, colspan: 3, )[RC], "));
    }

    #[test]
    fn test_explicit_span_of_one_is_still_spanning() {
        let table = single_row(vec![TableCell::new("X", Some(1), None)]);

        assert!(generate(table).contains("table.cell(rowspan: 1, )[X]"));
    }

    #[test]
    fn test_empty_cell() {
        let table = single_row(vec![
            TableCell::new("", None, None),
            TableCell::new("", None, Some(2)),
        ]);
        let markup = generate(table);

        assert!(markup.contains("  [], table.cell(colspan: 2, )[], \n"));
    }

    #[test]
    fn test_custom_indent() {
        let table = single_row(vec![TableCell::new("A", None, None)]);
        let options = TypstTableGeneratorOptions {
            indent: "\t".to_string(),
        };
        let markup = TypstTableGenerator::new(table, options).to_markup();

        assert_eq!(markup, "#table(columns: 1,\n\t[A], \n)");
    }

    #[test]
    fn test_output_writes_markup() -> anyhow::Result<()> {
        let table = single_row(vec![TableCell::new("A", None, None)]);
        let generator = TypstTableGenerator::new(table, TypstTableGeneratorOptions::default());
        let mut buffer = Vec::new();
        generator.output(&mut buffer)?;

        assert_eq!(String::from_utf8(buffer)?, generator.to_markup());
        Ok(())
    }
}
