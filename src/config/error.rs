use std::path::PathBuf;

/// Fatal configuration-resolution failures.
///
/// Token-file read errors are deliberately not represented here: the
/// resolver swallows them and treats the token as not found, falling
/// through to the next precedence level.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was absent from every source.
    #[error("required setting `{name}` not found: pass it explicitly or set {var}")]
    Missing {
        name: &'static str,
        var: &'static str,
    },

    /// A numeric setting could not be parsed from its string source.
    #[error("{var} is not a valid number: {value:?}")]
    MalformedNumber {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The configured certificate file could not be read.
    #[error("failed to read certificate file {}", .path.display())]
    CertificateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
