use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::clipboard::{self, ClipboardSource};
use crate::convert_html_to_typst_with;
use crate::generator::TypstTableGeneratorOptions;
use crate::parser::HtmlTableParserOptions;

/// Where the HTML to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Clipboard,
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Chooses the input from the command-line flags. `-` or no path means stdin.
    pub fn from_args(clipboard: bool, input: Option<&str>) -> Self {
        match input {
            _ if clipboard => InputSource::Clipboard,
            Some(path) if path != "-" => InputSource::File(PathBuf::from(path)),
            _ => InputSource::Stdin,
        }
    }
}

/// Reads the HTML text for `source`. `clipboard` is only consulted for
/// `InputSource::Clipboard`.
pub fn read_input(source: &InputSource, clipboard: &dyn ClipboardSource) -> Result<String> {
    match source {
        InputSource::Clipboard => Ok(clipboard.retrieve()?),
        InputSource::Stdin => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read HTML from stdin")?;
            Ok(html)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Converts the HTML from `source` and writes the markup to `output`
/// (a file path, or stdout when `None` or `-`).
///
/// The destination is only opened once conversion succeeded, so a failed
/// conversion never truncates an existing output file.
pub fn run_conversion(
    source: &InputSource,
    output: Option<&Path>,
    parser_options: &HtmlTableParserOptions,
    generator_options: &TypstTableGeneratorOptions,
) -> Result<()> {
    let markup = match source {
        InputSource::Clipboard => {
            let clipboard = clipboard::system_source()?;
            convert_source(source, clipboard.as_ref(), parser_options, generator_options)?
        }
        _ => convert_source(source, &NoClipboard, parser_options, generator_options)?,
    };

    let mut output_writer: Box<dyn Write> = match output {
        Some(path) if path != Path::new("-") => Box::new(
            fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        _ => Box::new(io::stdout()),
    };
    output_writer.write_all(markup.as_bytes())?;
    output_writer.write_all(b"\n")?;
    output_writer.flush()?;

    Ok(())
}

/// Reads and converts `source` into markup.
pub fn convert_source(
    source: &InputSource,
    clipboard: &dyn ClipboardSource,
    parser_options: &HtmlTableParserOptions,
    generator_options: &TypstTableGeneratorOptions,
) -> Result<String> {
    let html = read_input(source, clipboard)?;
    log::debug!("read {} bytes of HTML from {:?}", html.len(), source);
    Ok(convert_html_to_typst_with(
        &html,
        parser_options,
        generator_options,
    )?)
}

/// Placeholder for inputs that never touch the clipboard.
struct NoClipboard;

impl ClipboardSource for NoClipboard {
    fn retrieve(&self) -> std::result::Result<String, clipboard::ClipboardError> {
        Err(clipboard::ClipboardError::Unavailable(
            "clipboard input was not requested".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::ConvertError;
    use tempfile::tempdir;

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn retrieve(&self) -> std::result::Result<String, ClipboardError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_input_source_from_args() {
        assert_eq!(InputSource::from_args(true, Some("a.html")), InputSource::Clipboard);
        assert_eq!(InputSource::from_args(false, None), InputSource::Stdin);
        assert_eq!(InputSource::from_args(false, Some("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_args(false, Some("table.html")),
            InputSource::File(PathBuf::from("table.html"))
        );
    }

    #[test]
    fn test_convert_source_from_clipboard() -> Result<()> {
        let markup = convert_source(
            &InputSource::Clipboard,
            &FixedClipboard("<table><tr><td>A</td></tr></table>"),
            &HtmlTableParserOptions::default(),
            &TypstTableGeneratorOptions::default(),
        )?;

        assert_eq!(markup, "#table(columns: 1,\n  [A], \n)");
        Ok(())
    }

    #[test]
    fn test_run_conversion_file_to_file() -> Result<()> {
        let dir = tempdir()?;
        let input_path = dir.path().join("table.html");
        let output_path = dir.path().join("table.typ");
        fs::write(
            &input_path,
            r#"<table><tr><th>Name</th><th rowspan="2">Note</th></tr><tr><td>Alice</td></tr></table>"#,
        )?;

        run_conversion(
            &InputSource::File(input_path),
            Some(&output_path),
            &HtmlTableParserOptions::default(),
            &TypstTableGeneratorOptions::default(),
        )?;

        let written = fs::read_to_string(&output_path)?;
        assert_eq!(
            written,
            "#table(columns: 2,\n  [Name], table.cell(rowspan: 2, )[Note], \n  [Alice], \n)\n"
        );
        Ok(())
    }

    #[test]
    fn test_run_conversion_without_table_keeps_output() -> Result<()> {
        let dir = tempdir()?;
        let input_path = dir.path().join("plain.html");
        let output_path = dir.path().join("existing.typ");
        fs::write(&input_path, "<p>nothing to see</p>")?;
        fs::write(&output_path, "previous")?;

        let err = run_conversion(
            &InputSource::File(input_path),
            Some(&output_path),
            &HtmlTableParserOptions::default(),
            &TypstTableGeneratorOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::NoTableFound)
        ));
        assert_eq!(fs::read_to_string(&output_path)?, "previous");
        Ok(())
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(
            &InputSource::File(PathBuf::from("/nonexistent/html2typst/input.html")),
            &NoClipboard,
        );
        assert!(result.is_err());
    }
}
