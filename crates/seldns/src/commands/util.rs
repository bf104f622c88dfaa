//! Shared helpers for command handlers.

use std::path::Path;

use seldns_core::RecordSpec;

use crate::error::CliError;

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<serde_json::Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Read a request document (`{"domain": ..., "record": ..., "type": ...}`).
pub fn read_spec_file(path: &Path) -> Result<RecordSpec, CliError> {
    let value = read_json_file(path)?;
    serde_json::from_value(value).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("{}: {e}", path.display()),
    })
}

/// Map an interactive prompt failure into a `CliError`.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
