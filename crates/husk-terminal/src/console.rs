//! Output sink abstraction.
//!
//! The interpreter writes the transcript incrementally: prompt text,
//! one line per listing entry, and a clear-all signal for `clear`. The
//! real sink is stdout in the app crate; tests use `BufferConsole`.

/// Output sink the interpreter writes the transcript to.
pub trait Console {
    /// Append text without a trailing newline (used for the prompt).
    fn write(&mut self, text: &str);

    /// Append one line of output.
    fn write_line(&mut self, line: &str);

    /// Remove all visible content.
    fn clear(&mut self);
}

/// One observed console operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Write(String),
    Line(String),
    Clear,
}

/// In-memory output sink recording everything written.
///
/// `visible` mirrors what a screen would show (cleared by `clear`);
/// `events` keeps the full operation history for assertions.
#[derive(Debug, Default)]
pub struct BufferConsole {
    visible: String,
    events: Vec<ConsoleEvent>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// What a screen would currently show.
    pub fn visible(&self) -> &str {
        &self.visible
    }

    /// Every operation performed, clear included.
    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// All `write_line` payloads, in order, surviving clears.
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|ev| match ev {
                ConsoleEvent::Line(l) => Some(l.as_str()),
                _ => None,
            })
            .collect()
    }

    /// How many times the sink was cleared.
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|ev| matches!(ev, ConsoleEvent::Clear))
            .count()
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) {
        self.visible.push_str(text);
        self.events.push(ConsoleEvent::Write(text.to_string()));
    }

    fn write_line(&mut self, line: &str) {
        self.visible.push_str(line);
        self.visible.push('\n');
        self.events.push(ConsoleEvent::Line(line.to_string()));
    }

    fn clear(&mut self) {
        self.visible.clear();
        self.events.push(ConsoleEvent::Clear);
    }
}
