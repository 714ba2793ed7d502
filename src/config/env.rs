use std::path::PathBuf;

// Environment variables recognized by the resolver.
pub const VAULT_ADDR: &str = "VAULT_ADDR";
pub const VAULT_TOKEN: &str = "VAULT_TOKEN";
pub const VAULT_PROXY_ADDRESS: &str = "VAULT_PROXY_ADDRESS";
pub const VAULT_PROXY_PORT: &str = "VAULT_PROXY_PORT";
pub const VAULT_PROXY_USERNAME: &str = "VAULT_PROXY_USERNAME";
pub const VAULT_PROXY_PASSWORD: &str = "VAULT_PROXY_PASSWORD";
pub const VAULT_SSL_VERIFY: &str = "VAULT_SSL_VERIFY";
pub const VAULT_SSL_CERT: &str = "VAULT_SSL_CERT";
pub const VAULT_OPEN_TIMEOUT: &str = "VAULT_OPEN_TIMEOUT";
pub const VAULT_READ_TIMEOUT: &str = "VAULT_READ_TIMEOUT";

/// Source of name-value lookups used during configuration resolution.
///
/// `ProcessEnv` reads the real process environment; tests inject a
/// map-backed fake so resolution stays deterministic.
pub trait EnvironmentSource {
    /// Look up a variable by name. `None` means unset.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Home directory consulted for the `.vault-token` fallback.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// `EnvironmentSource` backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Trim a raw value, treating empty or whitespace-only as absent.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a boolean setting (1/true/yes/on → true). Anything else is false.
pub fn parse_bool_value(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Map-backed environment source for tests.
///
/// Generalizes over both halves of the real environment: variable lookups
/// and the home directory used for the token-file fallback.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeEnv {
    vars: std::collections::HashMap<String, String>,
    home: Option<PathBuf>,
}

#[cfg(test)]
impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

#[cfg(test)]
impl EnvironmentSource for FakeEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}
