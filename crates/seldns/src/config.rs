//! CLI configuration: a thin layer over `seldns_config`.
//!
//! Adds the resolution steps that depend on `GlobalOpts` flag overrides
//! (--api-token, --api-url, --timeout, --output).

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;
use tracing::debug;

use seldns_core::ServiceConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use seldns_config::{
    Config, Profile, config_path, load_config_or_default, save_config, store_api_token,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.profile_name(global.profile.as_deref()).to_owned()
}

/// Output format: flag (or `SELDNS_OUTPUT`), then `defaults.output`, then JSON.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Json)
    })
}

/// Build a `ServiceConfig` from the active profile with CLI flags on top.
///
/// A profile that is not in the config file is treated as empty, so a
/// bare `--api-token` (or `SELECTEL_API_KEY`) works without any config.
pub fn resolve_service_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<ServiceConfig, CliError> {
    let profile_name = active_profile_name(global, config);
    let profile = config
        .profiles
        .get(&profile_name)
        .cloned()
        .unwrap_or_default();
    debug!(
        profile = %profile_name,
        configured = config.profiles.contains_key(&profile_name),
        "resolving connection settings"
    );

    // 1. API URL (flag > env > profile > public endpoint)
    let api_url = match global.api_url.as_deref() {
        Some(raw) => raw.parse().map_err(|_| CliError::Validation {
            field: "api-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?,
        None => seldns_config::profile_api_url(&profile)?,
    };

    // 2. Token (flag / SELECTEL_API_KEY > profile chain)
    let token = match global.api_token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => SecretString::from(token.to_owned()),
        None => seldns_config::resolve_api_token(&profile, &profile_name)?,
    };

    // 3. Timeout (flag > profile > defaults)
    let secs = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(config.defaults.timeout);

    Ok(ServiceConfig {
        api_url,
        token,
        timeout: Duration::from_secs(secs),
    })
}
