//! Session configuration.
//!
//! A single TOML table with the four keys the emulator needs: the user
//! and hostname shown in the prompt, the archive to mount as the
//! sandbox, and where to persist the audit log.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Startup configuration for one emulator session.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// User name shown in the prompt and stamped on audit entries.
    pub user: String,
    /// Hostname shown in the prompt.
    pub hostname: String,
    /// Archive (tar or tar.gz) to extract as the sandbox root.
    pub archive: PathBuf,
    /// Destination of the persisted audit log.
    pub log_file: PathBuf,
}

impl Config {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
user = "kiwi"
hostname = "husk"
archive = "fs.tar"
log_file = "audit.xml"
"#;

    #[test]
    fn parse_all_keys() {
        let cfg: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(cfg.user, "kiwi");
        assert_eq!(cfg.hostname, "husk");
        assert_eq!(cfg.archive, PathBuf::from("fs.tar"));
        assert_eq!(cfg.log_file, PathBuf::from("audit.xml"));
    }

    #[test]
    fn missing_key_fails() {
        let err = toml::from_str::<Config>("user = \"kiwi\"");
        assert!(err.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("husk.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.hostname, "husk");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Config::load("/no/such/husk.toml").is_err());
    }
}
