// ── Reconcile results ──

use serde::Serialize;

use seldns_api::{Domain, Record};

/// The entity a reconcile reports back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    /// Names of every domain on the account (list mode).
    Domains(Vec<String>),
    Domain(Domain),
    Record(Record),
}

/// Terminal, successful result of one reconcile.
///
/// `Changed(None)` is what deletions and dry-run mutations report: there is
/// no resulting entity to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Unchanged(Option<Entity>),
    Changed(Option<Entity>),
}

impl Outcome {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    pub fn result(&self) -> Option<&Entity> {
        match self {
            Self::Unchanged(entity) | Self::Changed(entity) => entity.as_ref(),
        }
    }

    pub fn into_report(self) -> Report {
        let changed = self.changed();
        let result = match self {
            Self::Unchanged(entity) | Self::Changed(entity) => entity,
        };
        Report { changed, result }
    }
}

/// The `{changed, result?}` document printed on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Entity>,
}
