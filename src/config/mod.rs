/// Layered configuration resolution for the Vault client.
///
/// Resolution order per setting (earlier wins):
/// 1. Explicit caller-supplied value (`ClientOverrides`)
/// 2. Environment variables (`VAULT_*`)
/// 3. Token only: `.vault-token` file in the home directory
/// 4. Built-in defaults (`ssl_verify = true`; everything else absent)
///
/// Resolution is a single stateless pass. The environment is consulted
/// through the `EnvironmentSource` trait so tests can substitute a
/// map-backed fake for the real process environment.
mod env;
mod error;
mod overrides;
mod resolved;
mod resolver;

pub use env::{EnvironmentSource, ProcessEnv};
pub use error::ConfigError;
pub use overrides::ClientOverrides;
pub use resolved::ResolvedConfig;
pub use resolver::ConfigResolver;

/// Resolve a configuration against the real process environment.
pub fn resolve(overrides: ClientOverrides) -> Result<ResolvedConfig, ConfigError> {
    ConfigResolver::new(overrides, ProcessEnv).resolve()
}
