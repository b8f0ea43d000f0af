// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the engine.
///
/// The engine's core operations (`show`, `hide`, `update`, `dismiss`) are
/// deliberately infallible: unknown ids and post-teardown calls are silent
/// no-ops. Errors only arise at the edges — configuration I/O and claiming
/// the single presentation subscription.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The presentation subscription has already been claimed.
    ///
    /// A dispatcher feeds exactly one presentation consumer; a second
    /// `subscribe` call would let two consumers drift apart.
    SubscriberTaken,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::SubscriberTaken => {
                write!(f, "presentation subscriber has already been taken")
            }
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
    fn subscriber_taken_display_mentions_subscriber() {
        assert!(format!("{}", Error::SubscriberTaken).contains("subscriber"));
    }
}
