// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Props(PropsError),
    Diagnostics(String),
}

/// Misconfigured snackbar props, reported when the props are built rather
/// than when the banner is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsError {
    /// A required prop was never set.
    Missing(&'static str),
}

impl PropsError {
    /// Returns the name of the offending prop.
    pub fn prop_name(&self) -> &'static str {
        match self {
            PropsError::Missing(name) => name,
        }
    }
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropsError::Missing(name) => write!(f, "missing required prop `{}`", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Props(e) => write!(f, "Props Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PropsError> for Error {
    fn from(err: PropsError) -> Self {
        Error::Props(err)
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
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
    fn missing_prop_names_the_prop() {
        let err: Error = PropsError::Missing("on_request_close").into();
        assert_eq!(
            format!("{}", err),
            "Props Error: missing required prop `on_request_close`"
        );
    }

    #[test]
    fn prop_name_reports_the_missing_prop() {
        assert_eq!(PropsError::Missing("open").prop_name(), "open");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
