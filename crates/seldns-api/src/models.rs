// DNS API wire types
//
// Models for the `domains/v1` JSON API. The API returns more fields than the
// reconciler needs (tags, user ids, timestamps, SRV weights); the ones we
// don't model explicitly land in `extra` so results serialize losslessly.

use serde::{Deserialize, Serialize};

/// Default record TTL applied by the API when none is sent.
pub const DEFAULT_TTL: u32 = 3600;

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

// ── Domain ───────────────────────────────────────────────────────────

/// A hosted domain (zone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Domain {
    /// Build a domain with no extra attributes.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Body of `POST /`.
#[derive(Debug, Clone, Serialize)]
pub struct NewDomain<'a> {
    pub name: &'a str,
}

// ── Record ───────────────────────────────────────────────────────────

/// A resource record under a domain.
///
/// `name` is always fully qualified (`www.example.com`, or `example.com`
/// for apex records).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of record create (`POST`) and update (`PUT`) calls.
///
/// Optional fields are omitted from the JSON entirely, so an update without
/// `priority` leaves the stored priority untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}
