use super::{run_command, utf8_output, ClipboardError, ClipboardSource};

/// Clipboard tools tried in order; the first that yields HTML wins.
const COMMANDS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard", "-t", "text/html", "-o"]),
    ("wl-paste", &["--no-newline", "--type", "text/html"]),
];

/// Reads the `text/html` target via `xclip`, falling back to `wl-paste` on Wayland.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxClipboard;

impl ClipboardSource for LinuxClipboard {
    fn retrieve(&self) -> Result<String, ClipboardError> {
        let mut first_error = None;
        for (program, args) in COMMANDS {
            match run_command(program, args) {
                Ok(stdout) => return utf8_output(stdout),
                Err(e) => {
                    log::debug!("{} failed: {}", program, e);
                    first_error.get_or_insert(e);
                }
            }
        }
        Err(first_error.unwrap_or_else(|| {
            ClipboardError::Unavailable("no clipboard tool configured".to_string())
        }))
    }
}
