mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::Config;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    let cfg = config::load_config_or_default();
    let format = config::output_format(&cli.global, &cfg);

    if let Err(err) = run(cli, &cfg, format).await {
        let code = err.exit_code();
        if let Some(doc) = output::render_failure(format, &err.to_string()) {
            println!("{doc}");
        }
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr; stdout carries only the result document.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, cfg: &Config, format: OutputFormat) -> Result<(), CliError> {
    match cli.command {
        // Config commands never touch the API
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global, cfg, format),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "seldns", &mut std::io::stdout());
            Ok(())
        }

        Command::Domains => commands::domains::handle(&cli.global, cfg, format).await,

        Command::Apply(args) => commands::apply::handle(args, &cli.global, cfg, format).await,
    }
}
