//! Session state: the current-directory cursor plus prompt identity.

/// Mutable cursor state for one emulator run.
///
/// `cwd` is the only field that changes after construction, and only
/// `cd` changes it. `sandbox_root` records where the archive was
/// mounted; it is informational and never enforced as a floor.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current working directory, absolute.
    pub cwd: String,
    /// User shown in the prompt and stamped on audit entries.
    pub user: String,
    /// Hostname shown in the prompt.
    pub hostname: String,
    /// Directory the archive was extracted into.
    pub sandbox_root: String,
}

impl Session {
    /// Create a session rooted at the mounted sandbox directory.
    pub fn new(user: &str, hostname: &str, root: &str) -> Self {
        Self {
            cwd: root.to_string(),
            user: user.to_string(),
            hostname: hostname.to_string(),
            sandbox_root: root.to_string(),
        }
    }

    /// The prompt string written after every command.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.hostname, self.cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_shows_user_host_and_cwd() {
        let s = Session::new("kiwi", "husk", "/tmp/sandbox");
        assert_eq!(s.prompt(), "kiwi@husk:/tmp/sandbox$ ");
    }

    #[test]
    fn cwd_starts_at_sandbox_root() {
        let s = Session::new("kiwi", "husk", "/tmp/sandbox");
        assert_eq!(s.cwd, s.sandbox_root);
    }
}
