//! Connection-settings resolution for a Vault-style secrets service client.
//!
//! The crate's single job is deciding where a client connects and how it
//! authenticates: server address, auth token, proxy, TLS verification,
//! timeouts, and an optional custom CA certificate. Each setting is layered
//! from explicit overrides, `VAULT_*` environment variables, and (for the
//! token) a `.vault-token` file in the home directory. The HTTP transport
//! that consumes the resolved settings lives outside this crate.

pub mod config;

pub use config::{
    ClientOverrides, ConfigError, ConfigResolver, EnvironmentSource, ProcessEnv, ResolvedConfig,
};
