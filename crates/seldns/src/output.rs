//! Output formatting: JSON, YAML, table, plain.
//!
//! Success prints the `{changed, result?}` report; failure prints
//! `{failed: true, msg}` for the structured formats. Diagnostics and logs
//! go to stderr so stdout stays machine-readable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use seldns_core::{Entity, Report};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a reconcile report in the chosen format.
pub fn render_report(
    format: OutputFormat,
    report: &Report,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => render_json(report, false),
        OutputFormat::JsonCompact => render_json(report, true),
        OutputFormat::Yaml => render_yaml(report),
        OutputFormat::Table => render_report_table(report, color),
        OutputFormat::Plain => Ok(render_report_plain(report)),
    }
}

/// Render any serializable value; `text` is used for table and plain.
pub fn render_value<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text: impl FnOnce(&T) -> Result<String, CliError>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Table | OutputFormat::Plain => text(data),
    }
}

#[derive(Serialize)]
struct Failure<'a> {
    failed: bool,
    msg: &'a str,
}

/// The `{failed: true, msg}` document, or `None` for human formats.
pub fn render_failure(format: OutputFormat, msg: &str) -> Option<String> {
    let doc = Failure { failed: true, msg };
    match format {
        OutputFormat::Json => render_json(&doc, false).ok(),
        OutputFormat::JsonCompact => render_json(&doc, true).ok(),
        OutputFormat::Yaml => render_yaml(&doc).ok(),
        OutputFormat::Table | OutputFormat::Plain => None,
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    Ok(if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct DomainRow {
    #[tabled(rename = "Domain")]
    name: String,
}

fn status_line(changed: bool, color: bool) -> String {
    match (changed, color) {
        (true, true) => "changed".yellow().bold().to_string(),
        (true, false) => "changed".into(),
        (false, true) => "ok".green().to_string(),
        (false, false) => "ok".into(),
    }
}

fn render_report_table(report: &Report, color: bool) -> Result<String, CliError> {
    let status = status_line(report.changed, color);
    let body = match &report.result {
        None => return Ok(status),
        Some(Entity::Domains(names)) => {
            let rows: Vec<DomainRow> = names
                .iter()
                .map(|name| DomainRow { name: name.clone() })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        Some(entity) => {
            let rows = field_rows(&serde_json::to_value(entity)?);
            Table::new(rows).with(Style::rounded()).to_string()
        }
    };
    Ok(format!("{status}\n{body}"))
}

/// Flatten a JSON object into key/value rows; strings are shown unquoted.
fn field_rows(value: &Value) -> Vec<FieldRow> {
    let Value::Object(map) = value else {
        return vec![FieldRow {
            field: "value".into(),
            value: scalar(value),
        }];
    };
    map.iter()
        .map(|(k, v)| FieldRow {
            field: k.clone(),
            value: scalar(v),
        })
        .collect()
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_report_plain(report: &Report) -> String {
    let mut lines = vec![if report.changed { "changed" } else { "ok" }.to_owned()];
    match &report.result {
        None => {}
        Some(Entity::Domains(names)) => lines.extend(names.iter().cloned()),
        Some(Entity::Domain(domain)) => lines.push(domain.name.clone()),
        Some(Entity::Record(record)) => lines.push(record.id.to_string()),
    }
    lines.join("\n")
}
