//! Line tokenization, command resolution, and dispatch.
//!
//! Each input line is split on whitespace (no quoting or escaping),
//! the first token is resolved once against the closed command set, and
//! the matching navigator handler runs to completion before the next
//! line is accepted. Every dispatched command except `exit` reprints
//! the prompt.

use husk_audit::AuditLog;
use husk_vfs::Vfs;

use crate::console::Console;
use crate::navigator;
use crate::session::Session;

/// Whether the session keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Stay in the command loop.
    Continue,
    /// `exit` was entered; stop the loop.
    Exit,
}

/// The fixed command set plus the explicit unknown case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Exit,
    Ls,
    Cd,
    Whoami,
    Tree,
    Find,
    Clear,
    Unknown,
}

impl CommandKind {
    /// Resolve a command name, case-sensitively.
    fn resolve(name: &str) -> Self {
        match name {
            "exit" => Self::Exit,
            "ls" => Self::Ls,
            "cd" => Self::Cd,
            "whoami" => Self::Whoami,
            "tree" => Self::Tree,
            "find" => Self::Find,
            "clear" => Self::Clear,
            _ => Self::Unknown,
        }
    }
}

/// A tokenized input line: name plus remaining whitespace-split args.
#[derive(Debug, Clone)]
pub struct CommandLine {
    /// The line as typed.
    pub raw: String,
    /// First token.
    pub name: String,
    /// Remaining tokens.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Tokenize a line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?.to_string();
        Some(Self {
            raw: line.to_string(),
            name,
            args: tokens.map(str::to_string).collect(),
        })
    }
}

/// The command interpreter; owns session state and the audit log.
pub struct Interpreter {
    session: Session,
    audit: AuditLog,
}

impl Interpreter {
    pub fn new(session: Session, audit: AuditLog) -> Self {
        Self { session, audit }
    }

    /// The session cursor (read-only; only `cd` mutates it).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The accumulated audit log.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Execute one input line against the filesystem and output sink.
    ///
    /// Blank lines are a no-op: no output, no log entry, no prompt.
    /// `exit` returns [`Control::Exit`] with no output or log entry.
    pub fn execute(&mut self, line: &str, vfs: &dyn Vfs, out: &mut dyn Console) -> Control {
        let Some(cmd) = CommandLine::parse(line) else {
            return Control::Continue;
        };
        let kind = CommandKind::resolve(&cmd.name);
        log::debug!("dispatching {kind:?} from {:?}", cmd.raw);

        let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();
        let result = match kind {
            CommandKind::Exit => return Control::Exit,
            CommandKind::Ls => navigator::ls(&self.session, vfs, out, &mut self.audit),
            CommandKind::Cd => navigator::cd(&mut self.session, vfs, out, &mut self.audit, &args),
            CommandKind::Whoami => navigator::whoami(&self.session, out, &mut self.audit),
            CommandKind::Tree => navigator::tree(&self.session, vfs, out, &mut self.audit),
            CommandKind::Find => navigator::find(&self.session, vfs, out, &mut self.audit, &args),
            CommandKind::Clear => navigator::clear(out, &mut self.audit),
            CommandKind::Unknown => {
                out.write_line(&format!("command not found: {}", cmd.name));
                self.audit.record(&cmd.name, true)
            },
        };
        // An Err here means the audit file could not be rewritten; the
        // session stays alive either way.
        if let Err(e) = result {
            log::warn!("failed to persist audit log: {e}");
        }

        out.write(&self.session.prompt());
        Control::Continue
    }
}
