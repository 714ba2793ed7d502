use std::fmt;

/// Final, immutable connection settings produced by resolution.
///
/// Built once by `ConfigResolver` and handed to the HTTP transport; there
/// are no mutators. The `Debug` impl keeps the token and proxy password out
/// of log output.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub address: String,
    pub token: String,
    pub proxy_address: Option<String>,
    pub proxy_port: Option<u16>,
    pub proxy_username: Option<String>,
    pub proxy_password: Option<String>,
    pub ssl_verify: bool,
    /// Full PEM text of the custom CA certificate, verbatim.
    pub ssl_cert_pem: Option<String>,
    pub open_timeout_secs: Option<u32>,
    pub read_timeout_secs: Option<u32>,
}

impl ResolvedConfig {
    /// Log a summary of the resolved configuration. Secret-bearing fields
    /// are reduced to presence flags.
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.address,
            ssl_verify = self.ssl_verify,
            custom_ca = self.ssl_cert_pem.is_some(),
            proxy = self.proxy_address.as_deref().unwrap_or("none"),
            proxy_auth = self.proxy_username.is_some(),
            open_timeout_secs = self.open_timeout_secs,
            read_timeout_secs = self.read_timeout_secs,
            "resolved configuration"
        );
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .field("proxy_address", &self.proxy_address)
            .field("proxy_port", &self.proxy_port)
            .field("proxy_username", &self.proxy_username)
            .field(
                "proxy_password",
                &self.proxy_password.as_ref().map(|_| "<redacted>"),
            )
            .field("ssl_verify", &self.ssl_verify)
            .field("ssl_cert_pem", &self.ssl_cert_pem.as_ref().map(|_| "<pem>"))
            .field("open_timeout_secs", &self.open_timeout_secs)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_secrets() {
        let config = ResolvedConfig {
            address: "http://127.0.0.1:8200".to_string(),
            token: "c24e2469-298a-6c64-6a71-5b47c9ba459a".to_string(),
            proxy_address: Some("localhost".to_string()),
            proxy_port: Some(80),
            proxy_username: Some("scott".to_string()),
            proxy_password: Some("tiger".to_string()),
            ssl_verify: true,
            ssl_cert_pem: None,
            open_timeout_secs: Some(30),
            read_timeout_secs: Some(30),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("c24e2469"));
        assert!(!debug.contains("tiger"));
        assert!(debug.contains("http://127.0.0.1:8200"));
        assert!(debug.contains("scott"));
    }
}
