use lazy_static::lazy_static;
use regex::Regex;

use super::{run_command, utf8_output, ClipboardError, ClipboardSource};

lazy_static! {
    /// `osascript` prints the HTML flavor as `«data HTML3C7461...»`; some
    /// terminals render the guillemets as `<<`/`>>`.
    static ref DATA_HTML: Regex =
        Regex::new(r"(?s)^\s*(?:«|<<)\s*data\s+HTML([0-9A-Fa-f\s]*)(?:»|>>)\s*$").unwrap();
}

/// Reads the `public.html` flavor through AppleScript.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosClipboard;

impl ClipboardSource for MacosClipboard {
    fn retrieve(&self) -> Result<String, ClipboardError> {
        let stdout = run_command("osascript", &["-e", "the clipboard as «class HTML»"])?;
        decode_data_html(&utf8_output(stdout)?)
    }
}

/// Decodes an AppleScript `«data HTML…»` literal into the HTML it carries.
pub fn decode_data_html(payload: &str) -> Result<String, ClipboardError> {
    let captures = DATA_HTML.captures(payload).ok_or_else(|| {
        ClipboardError::Decode("expected an AppleScript «data HTML…» literal".to_string())
    })?;
    let hex: String = captures[1].chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = decode_hex(&hex)?;
    String::from_utf8(bytes).map_err(|e| ClipboardError::Decode(e.to_string()))
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, ClipboardError> {
    if hex.len() % 2 != 0 {
        return Err(ClipboardError::Decode(format!(
            "hex payload has odd length {}",
            hex.len()
        )));
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| {
                ClipboardError::Decode(format!("invalid hex byte {:?}: {}", &hex[i..i + 2], e))
            })
        })
        .collect()
}
