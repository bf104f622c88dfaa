//! Clap derive structures for the `seldns` CLI.
//!
//! Kept free of workspace crates so `build.rs` can include it directly
//! for man page and completion generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// seldns -- declarative DNS records for Selectel DNS hosting
#[derive(Debug, Parser)]
#[command(
    name = "seldns",
    version,
    about = "Reconcile Selectel DNS domains and records",
    long_about = "Describe the domain or record that should (or should not) exist and\n\
        seldns reads the current zone, computes the smallest change and applies it.\n\n\
        Every run is idempotent; use --dry-run to see what would change.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "SELDNS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// DNS API root (overrides profile)
    #[arg(long, env = "SELDNS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Selectel API token
    #[arg(long, env = "SELECTEL_API_KEY", global = true, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Output format [default: json, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "SELDNS_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "SELDNS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Key/value table
    Table,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ensure a domain or record is present or absent
    #[command(alias = "a")]
    Apply(ApplyArgs),

    /// List every domain on the account
    #[command(alias = "ls")]
    Domains,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  APPLY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
#[command(after_help = "Examples:\n  \
    seldns apply -d my.com --state present\n  \
    seldns apply -d my.com -r test -t A --value 127.0.0.1 --state present\n  \
    seldns apply -d my.com -r www -t CNAME --value my.com --state present --solo --dry-run")]
pub struct ApplyArgs {
    /// Domain name or numeric id; omit to list domains
    #[arg(long, short = 'd')]
    pub domain: Option<String>,

    /// Record name, short or fully qualified; empty for the apex
    #[arg(long, short = 'r')]
    pub record: Option<String>,

    /// Record type
    #[arg(long = "type", short = 't', ignore_case = true)]
    pub record_type: Option<RecordTypeArg>,

    /// Record TTL in seconds [default: 3600]
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Record content (IP address, target host, text)
    #[arg(long)]
    pub value: Option<String>,

    /// Record priority (MX, SRV)
    #[arg(long)]
    pub priority: Option<u32>,

    /// Whether the domain or record should exist
    #[arg(long)]
    pub state: Option<StateArg>,

    /// Remove every other record with the same name and type
    #[arg(long)]
    pub solo: bool,

    /// Report what would change without changing anything
    #[arg(long, alias = "check")]
    pub dry_run: bool,

    /// Read parameters from a JSON file (flags override file values)
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordTypeArg {
    A,
    Cname,
    Mx,
    Spf,
    Txt,
    Ns,
    Srv,
    Aaaa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with guided setup
    Init,

    /// Display current configuration (tokens masked)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API token in the system keyring (uses --profile)
    SetToken,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
