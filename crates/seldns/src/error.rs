//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use seldns_config::ConfigError;
use seldns_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Request input ────────────────────────────────────────────────

    /// Rejected by the reconciler before any API call.
    #[error("{message}")]
    #[diagnostic(
        code(seldns::input),
        help("Run: seldns apply --help")
    )]
    Input { message: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(seldns::validation))]
    Validation { field: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(seldns::no_credentials),
        help(
            "Pass --api-token, set SELECTEL_API_KEY, or store one with:\n  \
             seldns config set-token --profile {profile}"
        )
    )]
    NoCredentials { profile: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(seldns::auth_failed),
        help("Check the token under Account > API keys in the Selectel control panel.")
    )]
    AuthFailed { message: String },

    // ── Lookup ───────────────────────────────────────────────────────

    #[error("Domain not exists: {domain}")]
    #[diagnostic(
        code(seldns::domain_not_found),
        help(
            "Record changes never create the domain. Create it first with:\n  \
             seldns apply -d {domain} --state present"
        )
    )]
    DomainNotFound { domain: String },

    // ── Transport ────────────────────────────────────────────────────

    #[error("Unable to contact Selectel: {message}")]
    #[diagnostic(
        code(seldns::transport),
        help("Check network access to the API (see --api-url) or retry with -vv for details.")
    )]
    Transport { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(seldns::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: seldns config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(seldns::config))]
    Config { message: String },

    #[error("Keyring error: {message}")]
    #[diagnostic(
        code(seldns::keyring),
        help("Use `api_token_env` or a plaintext `api_token` in the profile instead.")
    )]
    Keyring { message: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(seldns::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(seldns::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(seldns::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } | Self::Validation { .. } | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            Self::NoCredentials { .. } | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::DomainNotFound { .. } => exit_code::NOT_FOUND,
            Self::Transport { .. } => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config { message } => CliError::Input { message },
            CoreError::DomainNotFound { domain } => CliError::DomainNotFound { domain },
            CoreError::Authentication { message } => CliError::AuthFailed { message },
            CoreError::Transport { message, .. } => CliError::Transport { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Keyring(e) => CliError::Keyring {
                message: e.to_string(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
