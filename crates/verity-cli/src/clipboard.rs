//! System clipboard through the platform's clipboard command.

use std::io::Write;
use std::process::{Command, Stdio};

use verity_session::{Clipboard, ClipboardError};

/// Commands tried in order; the first that accepts the text wins.
#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(windows)]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut failures = Vec::new();
        for (program, args) in CANDIDATES {
            match pipe_to(program, args, text) {
                Ok(()) => {
                    tracing::debug!(program, "copied to clipboard");
                    return Ok(());
                }
                Err(reason) => failures.push(format!("{program}: {reason}")),
            }
        }
        Err(ClipboardError(failures.join("; ")))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| e.to_string())?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(error) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(error.to_string());
        }
    }

    let status = child.wait().map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("exited with {status}"))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn pipes_text_to_a_reader() {
        assert_eq!(pipe_to("cat", &[], "https://example.com/?result=abc"), Ok(()));
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(pipe_to("verity-no-such-clipboard-tool", &[], "x").is_err());
    }

    #[test]
    fn child_that_never_reads_is_reaped_after_a_failed_write() {
        // Larger than any pipe buffer, so the write fails once `true` exits.
        let text = "x".repeat(4 * 1024 * 1024);
        assert!(pipe_to("true", &[], &text).is_err());
    }
}
