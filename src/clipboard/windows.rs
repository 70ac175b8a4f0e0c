use lazy_static::lazy_static;
use regex::Regex;

use super::{run_command, utf8_output, ClipboardError, ClipboardSource};

const GET_HTML_SCRIPT: &str = r#"
Add-Type -AssemblyName System.Windows.Forms
if ([Windows.Forms.Clipboard]::ContainsData([Windows.Forms.DataFormats]::Html)) {
    [Windows.Forms.Clipboard]::GetData([Windows.Forms.DataFormats]::Html)
}
"#;

lazy_static! {
    // CF_HTML description lines preceding the markup.
    static ref CF_HTML_HEADER: Regex = Regex::new(
        r"\A(?:(?:Version|StartHTML|EndHTML|StartFragment|EndFragment|StartSelection|EndSelection|SourceURL):[^\n]*(?:\r?\n|\z))*"
    )
    .unwrap();
}

/// Reads the `HTML Format` clipboard entry through PowerShell.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsClipboard;

impl ClipboardSource for WindowsClipboard {
    fn retrieve(&self) -> Result<String, ClipboardError> {
        let stdout = run_command(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Command", GET_HTML_SCRIPT],
        )?;
        Ok(strip_cf_html_header(&utf8_output(stdout)?))
    }
}

/// Removes the leading CF_HTML header (`Version:`, `StartHTML:`, ...) so only
/// the markup remains. Input without a header is returned unchanged.
pub fn strip_cf_html_header(payload: &str) -> String {
    CF_HTML_HEADER.replace(payload, "").into_owned()
}
