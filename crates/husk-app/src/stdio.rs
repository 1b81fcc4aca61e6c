//! Stdout-backed console.

use std::io::Write;

use husk_terminal::Console;

/// Writes the transcript to stdout; `clear` uses the ANSI erase-display
/// sequence.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write(&mut self, text: &str) {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear(&mut self) {
        // Erase display, then home the cursor.
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }
}
