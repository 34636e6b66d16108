//! Clipboard access through the terminal.
//!
//! Terminals that support OSC 52 put the payload on the system clipboard.
//! When stdout is not a terminal the text is printed instead so it can be
//! piped into a clipboard tool.

use std::io::{IsTerminal, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use deworm_core::export::ClipboardSink;
use deworm_core::{DewormError, DewormResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalClipboard;

impl ClipboardSink for TerminalClipboard {
    fn copy(&self, text: &str) -> DewormResult<()> {
        let mut stdout = std::io::stdout().lock();

        let written = if stdout.is_terminal() {
            write!(stdout, "{}", osc52_sequence(text))
        } else {
            writeln!(stdout, "{text}")
        };

        written
            .and_then(|_| stdout.flush())
            .map_err(|e| DewormError::Clipboard(e.to_string()))
    }
}

/// Escape sequence asking the terminal to set the clipboard.
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_clipboard_default_is_a_sink() {
        fn assert_sink<S: ClipboardSink + Default>() -> S {
            S::default()
        }
        let _clipboard: TerminalClipboard = assert_sink();
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }
}
