//! Retrieval of HTML text from the system clipboard.
//!
//! Each supported platform has its own [`ClipboardSource`] which shells out
//! to a native tool and returns the HTML payload as a `String`. Use
//! [`system_source`] to pick the implementation for the running OS.

pub mod linux;
pub mod macos;
pub mod windows;

use std::process::Command;

use thiserror::Error;

pub use linux::LinuxClipboard;
pub use macos::MacosClipboard;
pub use windows::WindowsClipboard;

/// Errors raised while reading HTML from the clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// No HTML on the clipboard, or the retrieval command failed.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to decode clipboard content: {0}")]
    Decode(String),
}

/// A source of HTML text copied to the clipboard.
pub trait ClipboardSource {
    fn retrieve(&self) -> Result<String, ClipboardError>;
}

/// Returns the clipboard source for the operating system this binary runs on.
pub fn system_source() -> Result<Box<dyn ClipboardSource>, ClipboardError> {
    source_for_os(std::env::consts::OS)
}

/// Returns the clipboard source for the given `std::env::consts::OS` name.
pub fn source_for_os(os: &str) -> Result<Box<dyn ClipboardSource>, ClipboardError> {
    match os {
        "macos" => Ok(Box::new(MacosClipboard)),
        "windows" => Ok(Box::new(WindowsClipboard)),
        "linux" => Ok(Box::new(LinuxClipboard)),
        other => Err(ClipboardError::UnsupportedPlatform(other.to_string())),
    }
}

/// Runs a clipboard tool and returns its standard output.
///
/// Spawn failures, non-zero exit codes and empty output are all reported as
/// `ClipboardError::Unavailable`.
pub(crate) fn run_command(program: &str, args: &[&str]) -> Result<Vec<u8>, ClipboardError> {
    log::debug!("running {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ClipboardError::Unavailable(format!("failed to run {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClipboardError::Unavailable(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    if output.stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(ClipboardError::Unavailable(
            "no HTML content on the clipboard".to_string(),
        ));
    }

    log::debug!("{} returned {} bytes", program, output.stdout.len());
    Ok(output.stdout)
}

/// Converts raw command output to a `String`, rejecting invalid UTF-8.
pub(crate) fn utf8_output(bytes: Vec<u8>) -> Result<String, ClipboardError> {
    String::from_utf8(bytes).map_err(|e| ClipboardError::Decode(e.to_string()))
}
