//! `seldns apply`: one reconcile of a domain or record.

use seldns_core::{DesiredState, RecordSpec, RecordType};
use tracing::debug;

use crate::cli::{ApplyArgs, GlobalOpts, OutputFormat, RecordTypeArg, StateArg};
use crate::config::Config;
use crate::error::CliError;

use super::util;

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::A => Self::A,
            RecordTypeArg::Cname => Self::Cname,
            RecordTypeArg::Mx => Self::Mx,
            RecordTypeArg::Spf => Self::Spf,
            RecordTypeArg::Txt => Self::Txt,
            RecordTypeArg::Ns => Self::Ns,
            RecordTypeArg::Srv => Self::Srv,
            RecordTypeArg::Aaaa => Self::Aaaa,
        }
    }
}

impl From<StateArg> for DesiredState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Present => Self::Present,
            StateArg::Absent => Self::Absent,
        }
    }
}

/// Merge `--from-file` (if any) with the explicit flags; flags win.
pub fn build_spec(args: ApplyArgs) -> Result<RecordSpec, CliError> {
    let mut spec = match args.from_file.as_deref() {
        Some(path) => util::read_spec_file(path)?,
        None => RecordSpec::default(),
    };

    if let Some(domain) = args.domain {
        spec.domain = Some(domain);
    }
    if let Some(record) = args.record {
        spec.record = Some(record);
    }
    if let Some(record_type) = args.record_type {
        spec.record_type = Some(record_type.into());
    }
    if let Some(value) = args.value {
        spec.value = Some(value);
    }
    if let Some(ttl) = args.ttl {
        spec.ttl = ttl;
    }
    if let Some(priority) = args.priority {
        spec.priority = Some(priority);
    }
    if let Some(state) = args.state {
        spec.state = Some(state.into());
    }
    spec.solo |= args.solo;

    if spec.record.is_some() != spec.value.is_some() {
        return Err(CliError::Validation {
            field: "record/value".into(),
            reason: "--record and --value must be given together".into(),
        });
    }

    Ok(spec)
}

pub async fn handle(
    args: ApplyArgs,
    global: &GlobalOpts,
    cfg: &Config,
    format: OutputFormat,
) -> Result<(), CliError> {
    let dry_run = args.dry_run;
    let spec = build_spec(args)?;
    debug!(?spec, dry_run, "apply request");
    super::reconcile_and_report(&spec, dry_run, global, cfg, format).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ApplyArgs {
        ApplyArgs {
            domain: None,
            record: None,
            record_type: None,
            ttl: None,
            value: None,
            priority: None,
            state: None,
            solo: false,
            dry_run: false,
            from_file: None,
        }
    }

    #[test]
    fn flags_map_onto_the_request() {
        let spec = build_spec(ApplyArgs {
            domain: Some("my.com".into()),
            record: Some("test".into()),
            record_type: Some(RecordTypeArg::Cname),
            value: Some("example.com".into()),
            state: Some(StateArg::Present),
            solo: true,
            ..args()
        })
        .unwrap();

        assert_eq!(
            spec,
            RecordSpec::for_record("my.com", "test", RecordType::Cname, "example.com")
                .present()
                .with_solo(true)
        );
    }

    #[test]
    fn no_flags_is_list_mode() {
        assert_eq!(build_spec(args()).unwrap(), RecordSpec::default());
    }

    #[test]
    fn record_without_value_is_rejected() {
        let err = build_spec(ApplyArgs {
            domain: Some("my.com".into()),
            record: Some("test".into()),
            ..args()
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }

    #[test]
    fn flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"domain": 42, "record": "www", "type": "A", "value": "10.0.0.1", "ttl": 600, "state": "present"}}"#
        )
        .unwrap();

        let spec = build_spec(ApplyArgs {
            value: Some("10.0.0.2".into()),
            from_file: Some(file.path().to_path_buf()),
            ..args()
        })
        .unwrap();

        assert_eq!(spec.domain.as_deref(), Some("42"));
        assert_eq!(spec.record_type, Some(RecordType::A));
        assert_eq!(spec.value.as_deref(), Some("10.0.0.2"));
        assert_eq!(spec.ttl, 600);
        assert_eq!(spec.state, Some(DesiredState::Present));
    }

    #[test]
    fn malformed_file_is_a_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = build_spec(ApplyArgs {
            from_file: Some(file.path().to_path_buf()),
            ..args()
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "from-file"));
    }
}
