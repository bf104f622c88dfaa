//! Command handlers: bridge CLI args -> reconciler -> output formatting.

pub mod apply;
pub mod config_cmd;
pub mod domains;
pub mod util;

use seldns_core::{Reconciler, RecordSpec};
use tracing::debug;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Connect with the resolved profile, reconcile once, and print the report.
pub async fn reconcile_and_report(
    spec: &RecordSpec,
    dry_run: bool,
    global: &GlobalOpts,
    cfg: &Config,
    format: OutputFormat,
) -> Result<(), CliError> {
    let service_cfg = config::resolve_service_config(global, cfg)?;
    let client = service_cfg.connect()?;
    debug!(api_url = %service_cfg.api_url, dry_run, "connected");

    let reconciler = Reconciler::new(client, dry_run);
    let report = reconciler.reconcile(spec).await?.into_report();

    let out = output::render_report(format, &report, output::should_color(global.color))?;
    output::print_output(&out, global.quiet);
    Ok(())
}
