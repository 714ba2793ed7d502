use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use super::env::{self, EnvironmentSource};
use super::error::ConfigError;
use super::overrides::ClientOverrides;
use super::resolved::ResolvedConfig;

/// File consulted in the home directory when no explicit or environment
/// token is available.
const TOKEN_FILE_NAME: &str = ".vault-token";

/// Builds a `ResolvedConfig` by layering:
/// explicit overrides → `VAULT_*` environment variables → token file → defaults.
pub struct ConfigResolver<E> {
    overrides: ClientOverrides,
    env: E,
}

impl<E: EnvironmentSource> ConfigResolver<E> {
    pub fn new(overrides: ClientOverrides, env: E) -> Self {
        Self { overrides, env }
    }

    /// Run one resolution pass. Stateless; may be called repeatedly.
    ///
    /// Touches the filesystem at most twice: once for the token file and
    /// once for the certificate file. The process environment is never
    /// mutated.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let overrides = &self.overrides;

        // -- Address: explicit value wins, then VAULT_ADDR --
        let address = self
            .string_setting(overrides.address.as_deref(), env::VAULT_ADDR)
            .ok_or(ConfigError::Missing {
                name: "address",
                var: env::VAULT_ADDR,
            })?;

        // -- Token: explicit → VAULT_TOKEN → ~/.vault-token --
        let token = self
            .string_setting(overrides.token.as_deref(), env::VAULT_TOKEN)
            .or_else(|| self.read_token_file())
            .ok_or(ConfigError::Missing {
                name: "token",
                var: env::VAULT_TOKEN,
            })?;

        // -- Proxy --
        let proxy_address =
            self.string_setting(overrides.proxy_address.as_deref(), env::VAULT_PROXY_ADDRESS);
        let proxy_port = match overrides.proxy_port {
            Some(explicit) => Some(explicit),
            None => self.number_setting::<u16>(env::VAULT_PROXY_PORT)?,
        };
        let proxy_username = self.string_setting(
            overrides.proxy_username.as_deref(),
            env::VAULT_PROXY_USERNAME,
        );
        let proxy_password = self.string_setting(
            overrides.proxy_password.as_deref(),
            env::VAULT_PROXY_PASSWORD,
        );

        // -- TLS: verification defaults to enabled --
        let ssl_verify = overrides
            .ssl_verify
            .or_else(|| self.bool_setting(env::VAULT_SSL_VERIFY))
            .unwrap_or(true);
        let ssl_cert_pem = self.resolve_certificate()?;

        // -- Timeouts --
        let open_timeout_secs = match overrides.open_timeout_secs {
            Some(explicit) => Some(explicit),
            None => self.number_setting::<u32>(env::VAULT_OPEN_TIMEOUT)?,
        };
        let read_timeout_secs = match overrides.read_timeout_secs {
            Some(explicit) => Some(explicit),
            None => self.number_setting::<u32>(env::VAULT_READ_TIMEOUT)?,
        };

        Ok(ResolvedConfig {
            address,
            token,
            proxy_address,
            proxy_port,
            proxy_username,
            proxy_password,
            ssl_verify,
            ssl_cert_pem,
            open_timeout_secs,
            read_timeout_secs,
        })
    }

    /// Explicit value first, then the environment. Empty or whitespace-only
    /// values count as absent at both levels.
    fn string_setting(&self, explicit: Option<&str>, var: &'static str) -> Option<String> {
        explicit
            .map(str::to_string)
            .and_then(env::non_empty)
            .or_else(|| self.env.lookup(var).and_then(env::non_empty))
    }

    fn bool_setting(&self, var: &'static str) -> Option<bool> {
        self.env
            .lookup(var)
            .and_then(env::non_empty)
            .map(|raw| env::parse_bool_value(&raw))
    }

    fn number_setting<T>(&self, var: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match self.env.lookup(var).and_then(env::non_empty) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|source| ConfigError::MalformedNumber {
                    var,
                    value: raw,
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Read `<home>/.vault-token`, trimmed. Any read failure counts as "no
    /// value found" and resolution falls through to the next source.
    fn read_token_file(&self) -> Option<String> {
        let path = self.env.home_dir()?.join(TOKEN_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(contents) => env::non_empty(contents),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "token file not used");
                None
            }
        }
    }

    /// Resolve the custom CA certificate. Direct PEM text wins outright;
    /// otherwise a path from the override or `VAULT_SSL_CERT` is read in
    /// full and exposed verbatim. Unlike the token file, a failed read here
    /// is fatal.
    fn resolve_certificate(&self) -> Result<Option<String>, ConfigError> {
        if let Some(pem) = self
            .overrides
            .ssl_cert_pem
            .as_ref()
            .filter(|pem| !pem.trim().is_empty())
        {
            return Ok(Some(pem.clone()));
        }

        let path = match &self.overrides.ssl_cert_file {
            Some(explicit) => Some(explicit.clone()),
            None => self
                .env
                .lookup(env::VAULT_SSL_CERT)
                .and_then(env::non_empty)
                .map(PathBuf::from),
        };
        let Some(path) = path else {
            return Ok(None);
        };

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigError::CertificateRead {
                path: path.clone(),
                source,
            })?;
        Ok(Some(contents))
    }
}
