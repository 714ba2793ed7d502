use std::fmt;
use std::path::PathBuf;

/// Explicit, caller-supplied connection settings.
///
/// Every field is optional; anything left `None` falls back to the
/// environment (and, for `token`, the home-directory token file). Plain
/// data, no builder state.
#[derive(Clone, Default)]
pub struct ClientOverrides {
    pub address: Option<String>,
    pub token: Option<String>,
    pub proxy_address: Option<String>,
    pub proxy_port: Option<u16>,
    pub proxy_username: Option<String>,
    pub proxy_password: Option<String>,
    /// TLS certificate verification. Enabled unless explicitly disabled.
    pub ssl_verify: Option<bool>,
    /// Path to a PEM certificate file to trust.
    pub ssl_cert_file: Option<PathBuf>,
    /// PEM certificate text supplied directly, bypassing the filesystem.
    pub ssl_cert_pem: Option<String>,
    pub open_timeout_secs: Option<u32>,
    pub read_timeout_secs: Option<u32>,
}

// Keeps the token and proxy password out of debug/log output.
impl fmt::Debug for ClientOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOverrides")
            .field("address", &self.address)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("proxy_address", &self.proxy_address)
            .field("proxy_port", &self.proxy_port)
            .field("proxy_username", &self.proxy_username)
            .field(
                "proxy_password",
                &self.proxy_password.as_ref().map(|_| "<redacted>"),
            )
            .field("ssl_verify", &self.ssl_verify)
            .field("ssl_cert_file", &self.ssl_cert_file)
            .field("ssl_cert_pem", &self.ssl_cert_pem.as_ref().map(|_| "<pem>"))
            .field("open_timeout_secs", &self.open_timeout_secs)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .finish()
    }
}
