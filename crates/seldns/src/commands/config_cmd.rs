//! Config subcommand handlers.

use std::fmt::Write as _;

use dialoguer::{Input, Select};

use seldns_core::DEFAULT_BASE_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const MASK: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of `cfg` with plaintext tokens masked.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.api_token.is_some() {
            profile.api_token = Some(MASK.into());
        }
    }
    cfg
}

fn prompt_token() -> Result<String, CliError> {
    let token = rpassword::prompt_password("API token: ").map_err(prompt_err)?;
    if token.trim().is_empty() {
        return Err(CliError::Validation {
            field: "api_token".into(),
            reason: "API token cannot be empty".into(),
        });
    }
    Ok(token.trim().to_owned())
}

/// Where `config init` puts the token.
enum TokenStorage {
    Keyring,
    Plaintext,
    EnvVar,
}

fn prompt_token_storage() -> Result<TokenStorage, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Read from an environment variable",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where should the API token come from?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    Ok(match selection {
        0 => TokenStorage::Keyring,
        1 => TokenStorage::EnvVar,
        _ => TokenStorage::Plaintext,
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    args: ConfigArgs,
    global: &GlobalOpts,
    cfg: &Config,
    format: OutputFormat,
) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global, cfg.clone()),

        ConfigCommand::Show => {
            let shown = redacted(cfg);
            let out = output::render_value(format, &shown, |c| Ok(toml::to_string_pretty(c)?))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let default = cfg.profile_name(None);
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: seldns config init");
                return Ok(());
            }
            let mut out = String::new();
            for name in cfg.profiles.keys() {
                let marker = if name == default { " *" } else { "" };
                let _ = writeln!(out, "{name}{marker}");
            }
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            if !cfg.profiles.contains_key(&name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            let mut cfg = cfg.clone();
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        ConfigCommand::SetToken => {
            let profile_name = config::active_profile_name(global, cfg);
            let token = prompt_token()?;
            config::store_api_token(&profile_name, &token)?;
            eprintln!("✓ API token for profile '{profile_name}' stored in system keyring");
            Ok(())
        }
    }
}

/// Interactive wizard: add (or replace) one profile and make it the default.
fn init(global: &GlobalOpts, mut cfg: Config) -> Result<(), CliError> {
    let path = config::config_path();
    eprintln!("seldns configuration wizard");
    eprintln!("   Config path: {}\n", path.display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(config::active_profile_name(global, &cfg))
        .interact_text()
        .map_err(prompt_err)?;

    let api_url: String = Input::new()
        .with_prompt("API URL")
        .default(DEFAULT_BASE_URL.into())
        .interact_text()
        .map_err(prompt_err)?;

    let mut profile = Profile {
        api_url: (api_url != DEFAULT_BASE_URL).then_some(api_url),
        ..Profile::default()
    };
    // Validate before anything is written.
    seldns_config::profile_api_url(&profile)?;

    match prompt_token_storage()? {
        TokenStorage::Keyring => {
            let token = prompt_token()?;
            config::store_api_token(&profile_name, &token)?;
            eprintln!("   ✓ API token stored in system keyring");
        }
        TokenStorage::EnvVar => {
            let var: String = Input::new()
                .with_prompt("Environment variable")
                .default("SELECTEL_API_KEY".into())
                .interact_text()
                .map_err(prompt_err)?;
            profile.api_token_env = Some(var);
        }
        TokenStorage::Plaintext => profile.api_token = Some(prompt_token()?),
    }

    cfg.profiles.insert(profile_name.clone(), profile);
    cfg.default_profile = Some(profile_name.clone());
    let written = config::save_config(&cfg)?;

    eprintln!("\n✓ Configuration written to {}", written.display());
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Test it: seldns domains");
    Ok(())
}
