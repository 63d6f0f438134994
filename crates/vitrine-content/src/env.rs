//! Process-environment access behind a capability trait
//!
//! Tier-1 overrides come from deployment-time environment variables. The
//! resolver reads them through this trait so tests can inject a fixture
//! map instead of mutating process state.

/// Read access to environment variables
pub trait EnvReader: Send + Sync {
    /// Look up a variable by name, `None` when unset or not unicode
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads from the real process environment
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
