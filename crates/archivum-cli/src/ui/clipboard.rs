use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crossterm::Command;
use std::fmt;
use std::io::{self, Write};

/// OSC 52 clipboard write. The terminal emulator owns the actual system
/// clipboard; we only emit the escape sequence.
pub struct CopyToClipboard<'a>(pub &'a str);

impl Command for CopyToClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "OSC 52 clipboard copy requires ANSI support",
        ))
    }
}

/// Copy text to the system clipboard via the terminal.
pub fn copy(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, CopyToClipboard(text))?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_an_osc52_sequence_with_base64_payload() {
        let mut buf = String::new();
        CopyToClipboard("hello").write_ansi(&mut buf).unwrap();
        assert_eq!(buf, format!("\x1b]52;c;{}\x07", STANDARD.encode("hello")));
    }

    #[test]
    fn empty_payload_is_still_well_formed() {
        let mut buf = String::new();
        CopyToClipboard("").write_ansi(&mut buf).unwrap();
        assert_eq!(buf, "\x1b]52;c;\x07");
    }
}
