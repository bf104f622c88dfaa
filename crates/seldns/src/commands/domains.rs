//! `seldns domains`: list mode without the `apply` ceremony.

use seldns_core::RecordSpec;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::config::Config;
use crate::error::CliError;

pub async fn handle(
    global: &GlobalOpts,
    cfg: &Config,
    format: OutputFormat,
) -> Result<(), CliError> {
    super::reconcile_and_report(&RecordSpec::default(), false, global, cfg, format).await
}
