// SPDX-License-Identifier: MPL-2.0
use crate::domain::region::Region;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    InvalidArgument(String),
    /// A menu or dialog id that the target region does not declare.
    NotFound {
        target: Target,
        id: String,
        region: Region,
    },
    /// The operation was superseded by a later call on the same key
    /// before its timer fired.
    Preempted,
}

/// Kind of overlay node an id was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Menu,
    Dialog,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Menu => "Menu",
            Target::Dialog => "Dialog",
        }
    }
}

impl Error {
    pub fn menu_not_found(id: &str, region: Region) -> Self {
        Error::NotFound {
            target: Target::Menu,
            id: id.to_string(),
            region,
        }
    }

    pub fn dialog_not_found(id: &str, region: Region) -> Self {
        Error::NotFound {
            target: Target::Dialog,
            id: id.to_string(),
            region,
        }
    }

    /// Returns true when the error only reports a superseded operation.
    pub fn is_preempted(&self) -> bool {
        matches!(self, Error::Preempted)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::InvalidArgument(e) => write!(f, "Invalid Argument: {}", e),
            Error::NotFound { target, id, region } => write!(
                f,
                "{} with id \"{}\" doesn't exist in the {} region",
                target.as_str(),
                id,
                region
            ),
            Error::Preempted => write!(f, "Operation was preempted by a later call"),
        }
    }
}

impl std::error::Error for Error {}

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
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Http(err.to_string())
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
    fn not_found_names_target_and_region() {
        let err = Error::menu_not_found("ghost", Region::Main);
        assert_eq!(
            format!("{}", err),
            "Menu with id \"ghost\" doesn't exist in the main region"
        );
        assert!(err.is_not_found());
        assert!(!err.is_preempted());
    }

    #[test]
    fn dialog_not_found_uses_dialog_target() {
        let err = Error::dialog_not_found("logout", Region::Full);
        assert!(matches!(
            err,
            Error::NotFound {
                target: Target::Dialog,
                ..
            }
        ));
    }

    #[test]
    fn preempted_is_detected() {
        assert!(Error::Preempted.is_preempted());
        assert!(format!("{}", Error::Preempted).contains("preempted"));
    }

    #[test]
    fn invalid_toml_maps_to_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
