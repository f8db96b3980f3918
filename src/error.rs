//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. Each concern owns its own
//! enum; the binary wraps them in `anyhow` at the edge.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised when constructing the response cache.
///
/// Once built, the cache itself never fails: a missing key is a normal outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The reap interval must be strictly positive
    #[error("cache interval must be greater than zero")]
    InvalidInterval,

    /// The reaper needs a tokio runtime to run on
    #[error("cache must be created inside a tokio runtime")]
    NoRuntime,
}

// == Config Error Enum ==
/// Errors raised when validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cache interval must be greater than zero seconds")]
    ZeroCacheInterval,

    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

// == Fetch Error Enum ==
/// Errors raised by the PokeAPI client.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or body read failure
    #[error("error fetching {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error("error fetching {url}: {status}")]
    Status { url: String, status: StatusCode },

    /// Body could not be decoded into the expected shape
    #[error("error parsing {} response from {url}: {source}", origin_label(.cached))]
    Decode {
        url: String,
        cached: bool,
        #[source]
        source: serde_json::Error,
    },
}

fn origin_label(cached: &bool) -> &'static str {
    if *cached {
        "cached"
    } else {
        "fetched"
    }
}

// == Command Error Enum ==
/// Errors surfaced to the user by the command loop.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("no command entered")]
    Empty,

    #[error("unknown command '{0}'. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("{0} not provided")]
    MissingArgument(&'static str),

    #[error("no previous locations to display")]
    NoPreviousPage,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing command output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for client calls.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(CommandError::Empty.to_string(), "no command entered");
        assert_eq!(
            CommandError::MissingArgument("area name").to_string(),
            "area name not provided"
        );
        assert!(CommandError::Unknown("fly".to_string())
            .to_string()
            .contains("'fly'"));
    }

    #[test]
    fn test_decode_error_mentions_origin() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::Decode {
            url: "http://x/pokemon/pikachu/".to_string(),
            cached: true,
            source,
        };
        assert!(err.to_string().starts_with("error parsing cached response"));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "http://x/pokemon/missingno/".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "error fetching http://x/pokemon/missingno/: 404 Not Found"
        );
    }
}
