// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Fetch(FetchError),
}

/// Specific error types for asset fetching.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection dropped
    Network(String),

    /// The server answered with a non-success status code
    Status(u16),

    /// The response body exceeds the size cap (in bytes)
    TooLarge(u64),

    /// The bytes are not a decodable image
    InvalidImage(String),

    /// The asset reference is neither a URL nor a usable path
    InvalidReference(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::TooLarge(_) => "error-fetch-too-large",
            FetchError::InvalidImage(_) => "error-fetch-invalid-image",
            FetchError::InvalidReference(_) => "error-fetch-invalid-reference",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::TooLarge(limit) => {
                write!(f, "Response exceeds {} bytes", limit)
            }
            FetchError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            FetchError::InvalidReference(reference) => {
                write!(f, "Invalid asset reference: {}", reference)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None => Error::Fetch(FetchError::Network(err.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_formats_properly() {
        let err = Error::Catalog("duplicate index 3".into());
        assert_eq!(format!("{}", err), "Catalog Error: duplicate index 3");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("= broken");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn fetch_error_wraps_into_error() {
        let err: Error = FetchError::Status(404).into();
        assert_eq!(format!("{}", err), "Fetch Error: HTTP status 404");
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(FetchError::Status(500).i18n_key(), "error-fetch-status");
        assert_eq!(FetchError::TooLarge(1).i18n_key(), "error-fetch-too-large");
        assert_eq!(
            FetchError::InvalidImage(String::new()).i18n_key(),
            "error-fetch-invalid-image"
        );
    }
}
