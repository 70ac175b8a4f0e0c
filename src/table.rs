use thiserror::Error;

/// Represents errors that can occur during Table validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The table has no rows, so no column count can be derived.
    #[error("table has no rows")]
    NoRows,
}

/// Represents a single cell within a table row.
///
/// `rowspan` and `colspan` record whether the attribute was present in the
/// source, not only its value: a cell written as `<td colspan="1">` still
/// carries `Some(1)` and is emitted as a spanning cell.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TableCell {
    /// The flattened, trimmed text content of the cell.
    pub text: String,
    /// Value of the `rowspan` attribute, if present.
    pub rowspan: Option<u32>,
    /// Value of the `colspan` attribute, if present.
    pub colspan: Option<u32>,
}

impl TableCell {
    /// Creates a new `TableCell`.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content of the cell.
    /// * `rowspan` - The `rowspan` attribute, `None` when absent.
    /// * `colspan` - The `colspan` attribute, `None` when absent.
    pub fn new(text: &str, rowspan: Option<u32>, colspan: Option<u32>) -> Self {
        TableCell {
            text: text.to_string(),
            rowspan,
            colspan,
        }
    }

    /// Number of columns the cell occupies, defaulting to 1.
    pub fn col_span(&self) -> u32 {
        self.colspan.unwrap_or(1)
    }

    /// Returns `true` if either span attribute was present in the source.
    pub fn is_spanning(&self) -> bool {
        self.rowspan.is_some() || self.colspan.is_some()
    }
}

/// One row of a table.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TableRow {
    /// Cells in left-to-right document order.
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell to the end of the row.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }
}

/// Represents an entire table.
///
/// The first row is authoritative for the column count; later rows are
/// neither inspected nor validated against it.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Table {
    /// Rows in document order.
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Creates a new, empty `Table`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Validates the `Table` structure.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the table has at least one row, otherwise a `TableError`.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows.is_empty() {
            return Err(TableError::NoRows);
        }
        Ok(())
    }

    /// Checks if the `Table` is valid.
    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Sum of the column spans of the first row, or 0 for a table without rows.
    pub fn column_count(&self) -> u32 {
        self.rows
            .first()
            .map(|row| {
                row.cells
                    .iter()
                    .map(TableCell::col_span)
                    .fold(0u32, u32::saturating_add)
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_table() -> Table {
        let mut table = Table::new();

        let mut first = TableRow::new();
        first.add_cell(TableCell::new("A", None, None));
        first.add_cell(TableCell::new("B", None, Some(2)));
        table.add_row(first);

        let mut second = TableRow::new();
        second.add_cell(TableCell::new("C", None, None));
        second.add_cell(TableCell::new("D", None, None));
        second.add_cell(TableCell::new("E", None, None));
        table.add_row(second);

        table
    }

    #[test]
    fn test_table_cell_spans_default_to_one() {
        let cell = TableCell::new("x", None, None);
        assert_eq!(cell.col_span(), 1);
        assert!(!cell.is_spanning());
    }

    #[test]
    fn test_table_cell_explicit_one_is_spanning() {
        let cell = TableCell::new("x", None, Some(1));
        assert_eq!(cell.col_span(), 1);
        assert!(cell.is_spanning());
    }

    #[test]
    fn test_table_validate() {
        assert_eq!(Table::new().validate(), Err(TableError::NoRows));
        assert!(!Table::new().valid());
        assert!(reference_table().valid());
    }

    #[test]
    fn test_column_count_uses_first_row_only() {
        let mut table = reference_table();
        assert_eq!(table.column_count(), 3);

        let mut wide = TableRow::new();
        for _ in 0..7 {
            wide.add_cell(TableCell::new("", None, None));
        }
        table.add_row(wide);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_column_count_saturates() {
        let mut row = TableRow::new();
        row.add_cell(TableCell::new("A", None, Some(u32::MAX)));
        row.add_cell(TableCell::new("B", None, Some(2)));
        let mut table = Table::new();
        table.add_row(row);

        assert_eq!(table.column_count(), u32::MAX);
    }

    #[test]
    fn test_column_count_empty_table() {
        assert_eq!(Table::new().column_count(), 0);
    }
}
