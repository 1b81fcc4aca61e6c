//! Command interpreter for husk.
//!
//! One `Interpreter` owns the session cursor and the audit log. Each
//! input line is tokenized, resolved to a fixed command set, and
//! dispatched against a `Vfs` capability and a `Console` output sink.

mod console;
mod interpreter;
mod navigator;
mod session;

/// In-memory output sink recording everything written, for tests.
pub use console::BufferConsole;
/// Output sink the interpreter writes the transcript to.
pub use console::Console;
/// One observed console operation.
pub use console::ConsoleEvent;
/// A tokenized input line.
pub use interpreter::CommandLine;
/// Whether the session keeps running after a command.
pub use interpreter::Control;
/// The command interpreter; owns session state and the audit log.
pub use interpreter::Interpreter;
/// Mutable cursor state for one emulator run.
pub use session::Session;
