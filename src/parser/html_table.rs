// src/parser/html_table.rs
use clap::Args;
use html5ever::Attribute;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{ConvertError, Result};
use crate::table::{Table, TableCell, TableRow};

#[derive(Debug, Clone, Default, Args)]
pub struct HtmlTableParserOptions {
    /// Keep runs of whitespace inside cell text instead of collapsing them to one space.
    #[arg(long)]
    pub preserve_whitespace: bool,
}

/// A parser that extracts the first HTML `<table>` of a document into a `Table`.
pub struct HtmlTableParser {
    options: HtmlTableParserOptions,
}

impl HtmlTableParser {
    /// Creates a new instance of `HtmlTableParser` with the given options.
    pub fn new(options: HtmlTableParserOptions) -> Self {
        HtmlTableParser { options }
    }

    /// Parses the given HTML input and returns the first table it contains.
    ///
    /// # Arguments
    /// * `input` - A string slice containing the HTML input to be parsed.
    ///
    /// # Returns
    /// * `Ok(Table)` - The rows and cells of the first `<table>` element.
    /// * `Err(ConvertError::NoTableFound)` - If the input has no `<table>` element.
    /// * `Err(ConvertError::EmptyTable)` - If the first table has no rows.
    pub fn parse(&self, input: &str) -> Result<Table> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut input.as_bytes())?;

        let table_node =
            find_first_element(&dom.document, "table").ok_or(ConvertError::NoTableFound)?;

        let mut table = Table::new();
        for row_node in collect_rows(&table_node) {
            let mut row = TableRow::new();
            for cell_node in row_node.children.borrow().iter() {
                if matches!(tag_name(cell_node), Some("td") | Some("th")) {
                    row.add_cell(self.parse_cell(cell_node));
                }
            }
            table.add_row(row);
        }
        table.validate()?;

        log::debug!(
            "parsed table with {} rows and {} columns",
            table.rows.len(),
            table.column_count()
        );
        Ok(table)
    }

    fn parse_cell(&self, handle: &Handle) -> TableCell {
        let mut raw = String::new();
        collect_text(handle, &mut raw);
        let text = if self.options.preserve_whitespace {
            raw.trim().to_string()
        } else {
            raw.split_whitespace().collect::<Vec<_>>().join(" ")
        };

        let (rowspan, colspan) = match &handle.data {
            NodeData::Element { attrs, .. } => {
                let attrs = attrs.borrow();
                (
                    span_attribute(&attrs, "rowspan"),
                    span_attribute(&attrs, "colspan"),
                )
            }
            _ => (None, None),
        };

        TableCell {
            text,
            rowspan,
            colspan,
        }
    }
}

/// Returns the local tag name if the node is an element.
fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Depth-first, document-order search for the first element named `tag`.
fn find_first_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if tag_name(handle) == Some(tag) {
        return Some(handle.clone());
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Collects the rows of a table in the order of `HTMLTableElement.rows`:
/// `<thead>` rows, then body rows in tree order, then `<tfoot>` rows.
/// Rows belonging to nested tables are not visited.
fn collect_rows(table: &Handle) -> Vec<Handle> {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();

    for child in table.children.borrow().iter() {
        match tag_name(child) {
            Some("tr") => body.push(child.clone()),
            Some("thead") => head.extend(child_rows(child)),
            Some("tbody") => body.extend(child_rows(child)),
            Some("tfoot") => foot.extend(child_rows(child)),
            _ => {}
        }
    }

    head.into_iter().chain(body).chain(foot).collect()
}

fn child_rows(section: &Handle) -> Vec<Handle> {
    section
        .children
        .borrow()
        .iter()
        .filter(|child| tag_name(child) == Some("tr"))
        .cloned()
        .collect()
}

/// Appends every descendant text node of `handle` to `out`.
fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Upper bounds browsers apply to span attributes.
const MAX_COLSPAN: u32 = 1000;
const MAX_ROWSPAN: u32 = 65534;

/// Reads a span attribute. An absent or empty attribute yields `None`. Any
/// other value yields `Some`: values that are not positive integers fall back
/// to 1 and large values are clamped to the browser limits.
fn span_attribute(attrs: &[Attribute], name: &str) -> Option<u32> {
    let attr = attrs.iter().find(|attr| attr.name.local.as_ref() == name)?;
    let raw: &str = &attr.value;
    if raw.is_empty() {
        return None;
    }

    let max = if name == "colspan" { MAX_COLSPAN } else { MAX_ROWSPAN };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => {
            if value > u64::from(max) {
                log::warn!("{} value {} exceeds {}, clamping", name, value, max);
            }
            Some(value.min(u64::from(max)) as u32)
        }
        _ => {
            log::warn!("invalid {} value {:?}, using 1", name, raw);
            Some(1)
        }
    }
}
