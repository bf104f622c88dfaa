// ── Desired state ──
//
// `RecordSpec` is what the caller wants to exist. Presence matters:
// `record: None` selects the domain-level branch while `Some("")` targets
// the apex record, so neither field collapses to a plain string default.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use seldns_api::models::DEFAULT_TTL;

/// Record types the DNS hosting API accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecordType {
    A,
    Cname,
    Mx,
    Spf,
    Txt,
    Ns,
    Srv,
    Aaaa,
}

/// Whether the target entity should exist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DesiredState {
    Present,
    Absent,
}

/// One reconcile request: at most one domain and one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSpec {
    /// Domain name or numeric id. `None` lists every domain.
    #[serde(deserialize_with = "name_or_id")]
    pub domain: Option<String>,
    /// Short record name; `Some("")` is the apex, `None` the domain itself.
    pub record: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<RecordType>,
    /// Record content.
    pub value: Option<String>,
    pub ttl: u32,
    pub priority: Option<u32>,
    pub state: Option<DesiredState>,
    /// Remove every other record sharing this record's name and type.
    pub solo: bool,
}

impl Default for RecordSpec {
    fn default() -> Self {
        Self {
            domain: None,
            record: None,
            record_type: None,
            value: None,
            ttl: DEFAULT_TTL,
            priority: None,
            state: None,
            solo: false,
        }
    }
}

impl RecordSpec {
    /// Domain-level request.
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }

    /// Record-level request for `record` of `record_type` under `domain`.
    pub fn for_record(
        domain: impl Into<String>,
        record: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: Some(domain.into()),
            record: Some(record.into()),
            record_type: Some(record_type),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: DesiredState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_solo(mut self, solo: bool) -> Self {
        self.solo = solo;
        self
    }

    pub fn present(self) -> Self {
        self.with_state(DesiredState::Present)
    }

    pub fn absent(self) -> Self {
        self.with_state(DesiredState::Absent)
    }
}

/// Accept `"example.com"`, `"12345"` or a bare JSON number for `domain`.
fn name_or_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NameOrId {
        Name(String),
        Id(u64),
    }

    Ok(Option::<NameOrId>::deserialize(deserializer)?.map(|v| match v {
        NameOrId::Name(name) => name,
        NameOrId::Id(id) => id.to_string(),
    }))
}
