// ── Core error types ──
//
// User-facing errors from seldns-core. Consumers never see raw HTTP status
// codes or JSON parse failures; the `From<seldns_api::Error>` impl folds
// transport-layer errors into the kinds the CLI reports.

use thiserror::Error;

use crate::model::DesiredState;

/// Coarse classification of a failed reconcile, used for exit codes and
/// the `{failed, msg}` result document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// Bad or missing input: credentials, record type/value, state.
    Config,
    /// The domain named in a record-level request does not exist.
    NotFound,
    /// Anything the DNS API or the network reported.
    Transport,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    /// Message is surfaced to the caller verbatim.
    #[error("{message}")]
    Config { message: String },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Domain not exists: {domain}")]
    DomainNotFound { domain: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Unable to contact Selectel: {message}")]
    Transport {
        message: String,
        /// HTTP status code (if the API answered at all).
        status: Option<u16>,
    },
}

impl CoreError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Error for a state argument the requested branch cannot act on.
    pub(crate) fn unknown_state(state: Option<DesiredState>) -> Self {
        let shown = state.map_or_else(|| "None".to_owned(), |s| s.to_string());
        Self::config(format!("'{shown}' is an unknown value for the state argument"))
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Config { .. } => FailureKind::Config,
            Self::DomainNotFound { .. } => FailureKind::NotFound,
            Self::Authentication { .. } | Self::Transport { .. } => FailureKind::Transport,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<seldns_api::Error> for CoreError {
    fn from(err: seldns_api::Error) -> Self {
        match err {
            seldns_api::Error::InvalidToken => CoreError::Authentication {
                message: "Invalid API token".into(),
            },
            seldns_api::Error::Authentication { message } => {
                CoreError::Authentication { message }
            }
            seldns_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid API URL: {e}"),
            },
            seldns_api::Error::Deserialization { message, body: _ } => CoreError::Transport {
                message: format!("unexpected response: {message}"),
                status: None,
            },
            other => CoreError::Transport {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_renders_none() {
        let err = CoreError::unknown_state(None);
        assert_eq!(
            err.to_string(),
            "'None' is an unknown value for the state argument"
        );
        assert_eq!(err.kind(), FailureKind::Config);
    }

    #[test]
    fn api_errors_become_transport() {
        let err = CoreError::from(seldns_api::Error::Api {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(
            err.to_string(),
            "Unable to contact Selectel: API error (HTTP 500): boom"
        );
        assert!(matches!(err, CoreError::Transport { status: Some(500), .. }));
    }

    #[test]
    fn invalid_token_is_authentication() {
        let err = CoreError::from(seldns_api::Error::InvalidToken);
        assert!(matches!(err, CoreError::Authentication { .. }));
    }

    #[test]
    fn failure_kind_display() {
        assert_eq!(FailureKind::NotFound.to_string(), "not_found");
    }
}
