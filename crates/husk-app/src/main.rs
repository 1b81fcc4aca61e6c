//! husk entry point.
//!
//! Loads the session config, extracts the configured archive into a
//! sandbox directory, and runs the command loop over stdin/stdout until
//! `exit` or end of input.

mod mount;
mod stdio;

use std::io::BufRead;

use anyhow::Result;

use husk_audit::AuditLog;
use husk_terminal::{Console, Control, Interpreter, Session};
use husk_types::Config;
use husk_vfs::HostVfs;
use stdio::StdoutConsole;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "husk.toml".to_string());
    let config = Config::load(&config_path)?;

    let mount_dir = std::env::temp_dir().join("husk-sandbox");
    let root = mount::extract_archive(&config.archive, &mount_dir)?;
    log::info!(
        "mounted {} at {}",
        config.archive.display(),
        root.display()
    );

    let audit = AuditLog::create(&config.log_file, &config.user)?;
    let session = Session::new(&config.user, &config.hostname, &root.to_string_lossy());
    let mut interp = Interpreter::new(session, audit);

    let vfs = HostVfs::new();
    let mut console = StdoutConsole::new();
    console.write(&interp.session().prompt());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if interp.execute(&line, &vfs, &mut console) == Control::Exit {
            break;
        }
    }
    Ok(())
}
