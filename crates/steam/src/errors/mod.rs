//! Error types and fallback classification for the Steam crate.
//!
//! This module provides:
//! - [`SteamError`]: The error enum for every Steam request and parse step
//! - [`FallbackClass`]: Classification for deciding whether the source chain continues

mod fallback;

pub use fallback::FallbackClass;

use thiserror::Error;

/// Errors that can occur while talking to Steam.
///
/// Each variant is classified into a [`FallbackClass`] via
/// [`fallback_class`](Self::fallback_class), which tells the source chain
/// whether the next source should be tried.
#[derive(Error, Debug)]
pub enum SteamError {
    /// The player's game details are private.
    /// No other source can read them either, so this is terminal.
    #[error("{message}")]
    ProfilePrivate {
        /// The message Steam returned (e.g. "Profile is not public")
        message: String,
    },

    /// The source needs a Web API key and none was configured.
    #[error("Missing API key: {provider}")]
    MissingApiKey {
        /// The source that needed the key
        provider: String,
    },

    /// The request did not complete before the client timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The source that timed out
        provider: String,
    },

    /// Steam answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The source that received the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The transport failed before a response was received.
    #[error("Request failed: {provider} - {message}")]
    RequestFailed {
        /// The source that issued the request
        provider: String,
        /// The underlying transport error
        message: String,
    },

    /// The body did not match the expected shape.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The source that returned the body
        provider: String,
        /// What failed to parse
        message: String,
    },
}

impl SteamError {
    /// Returns the fallback classification for this error.
    ///
    /// - [`FallbackClass::Terminal`]: stop the chain and surface the error
    /// - [`FallbackClass::NextSource`]: treat this source as "no data" and continue
    ///
    /// # Examples
    ///
    /// ```
    /// use nesta_steam::errors::{FallbackClass, SteamError};
    ///
    /// let error = SteamError::ProfilePrivate { message: "Profile is not public".to_string() };
    /// assert_eq!(error.fallback_class(), FallbackClass::Terminal);
    ///
    /// let error = SteamError::Timeout { provider: "USER_STATS".to_string() };
    /// assert_eq!(error.fallback_class(), FallbackClass::NextSource);
    /// ```
    pub fn fallback_class(&self) -> FallbackClass {
        match self {
            Self::ProfilePrivate { .. } => FallbackClass::Terminal,

            Self::MissingApiKey { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::RequestFailed { .. }
            | Self::InvalidResponse { .. } => FallbackClass::NextSource,
        }
    }

    pub fn is_profile_private(&self) -> bool {
        matches!(self, Self::ProfilePrivate { .. })
    }

    pub(crate) fn invalid(provider: &str, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_private_is_terminal() {
        let error = SteamError::ProfilePrivate {
            message: "Profile is not public".to_string(),
        };
        assert_eq!(error.fallback_class(), FallbackClass::Terminal);
        assert!(error.is_profile_private());
    }

    #[test]
    fn test_transport_errors_try_next_source() {
        let errors = vec![
            SteamError::Timeout {
                provider: "PLAYER_ACHIEVEMENTS".to_string(),
            },
            SteamError::HttpStatus {
                provider: "USER_STATS".to_string(),
                status: 500,
            },
            SteamError::RequestFailed {
                provider: "COMMUNITY_STATS".to_string(),
                message: "connection reset".to_string(),
            },
            SteamError::invalid("USER_STATS", "missing playerstats"),
            SteamError::MissingApiKey {
                provider: "USER_STATS".to_string(),
            },
        ];

        for error in errors {
            assert_eq!(error.fallback_class(), FallbackClass::NextSource);
            assert!(!error.is_profile_private());
        }
    }

    #[test]
    fn test_error_display() {
        let error = SteamError::ProfilePrivate {
            message: "Profile is not public".to_string(),
        };
        assert_eq!(format!("{}", error), "Profile is not public");

        let error = SteamError::HttpStatus {
            provider: "USER_STATS".to_string(),
            status: 403,
        };
        assert_eq!(format!("{}", error), "HTTP 403 from USER_STATS");
    }
}
