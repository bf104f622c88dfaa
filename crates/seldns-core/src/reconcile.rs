// ── Reconciler ──
//
// Maps (desired spec, observed remote state) to the minimal set of API
// calls. Branches strictly on which of `domain` / `record` are present:
//
//   no domain          -> list domain names
//   domain, no record  -> ensure the domain exists / is gone
//   domain + record    -> ensure the record exists / is gone (never creates
//                         the domain)
//
// Every branch performs all of its reads even in dry-run mode so the
// changed/unchanged classification is identical with and without it.

use tracing::{debug, info, warn};

use seldns_api::{Domain, Record, RecordPayload};

use crate::error::CoreError;
use crate::model::{DesiredState, Entity, Outcome, RecordSpec, RecordType};
use crate::service::DnsService;

/// Fully qualify `record` under `domain`.
///
/// An empty record is the apex. Names that already end with the domain are
/// left alone so `test.my.com` never becomes `test.my.com.my.com`.
pub fn normalize_record_name(record: &str, domain: &str) -> String {
    if record.is_empty() {
        domain.to_owned()
    } else if record.ends_with(domain) {
        record.to_owned()
    } else {
        format!("{record}.{domain}")
    }
}

/// Drives one reconcile against a [`DnsService`].
pub struct Reconciler<S> {
    service: S,
    dry_run: bool,
}

impl<S: DnsService> Reconciler<S> {
    pub fn new(service: S, dry_run: bool) -> Self {
        Self { service, dry_run }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Bring remote state in line with `spec`.
    pub async fn reconcile(&self, spec: &RecordSpec) -> Result<Outcome, CoreError> {
        let domain = spec.domain.as_deref().filter(|d| !d.is_empty());

        match (domain, spec.record.as_deref()) {
            (None, _) => self.list_domains().await,
            (Some(domain), None) => self.reconcile_domain(domain, spec.state).await,
            (Some(domain), Some(record)) => self.reconcile_record(domain, record, spec).await,
        }
    }

    // ── List mode ────────────────────────────────────────────────────

    async fn list_domains(&self) -> Result<Outcome, CoreError> {
        let domains = self.service.list_domains().await?;
        debug!(count = domains.len(), "listed domains");
        let names = domains.into_iter().map(|d| d.name).collect();
        Ok(Outcome::Unchanged(Some(Entity::Domains(names))))
    }

    // ── Domain branch ────────────────────────────────────────────────

    async fn reconcile_domain(
        &self,
        name: &str,
        state: Option<DesiredState>,
    ) -> Result<Outcome, CoreError> {
        let state = state.ok_or_else(|| CoreError::unknown_state(None))?;

        let domains = self.service.list_domains().await?;
        let found = domains
            .into_iter()
            .find(|d| d.name == name || d.id.to_string() == name);
        debug!(domain = name, found = found.is_some(), %state, "resolved domain");

        match (state, found) {
            (DesiredState::Present, Some(domain)) => {
                Ok(Outcome::Unchanged(Some(Entity::Domain(domain))))
            }
            (DesiredState::Present, None) => {
                if self.dry_run {
                    info!(domain = name, dry_run = true, "would create domain");
                    return Ok(Outcome::Changed(None));
                }
                info!(domain = name, "creating domain");
                let created = self.service.create_domain(name).await?;
                Ok(Outcome::Changed(Some(Entity::Domain(created))))
            }
            (DesiredState::Absent, Some(domain)) => {
                if self.dry_run {
                    info!(domain = name, domain_id = domain.id, dry_run = true, "would delete domain");
                } else {
                    info!(domain = name, domain_id = domain.id, "deleting domain");
                    self.service.delete_domain(domain.id).await?;
                }
                Ok(Outcome::Changed(None))
            }
            (DesiredState::Absent, None) => Ok(Outcome::Unchanged(None)),
        }
    }

    // ── Record branch ────────────────────────────────────────────────

    async fn reconcile_record(
        &self,
        domain: &str,
        record: &str,
        spec: &RecordSpec,
    ) -> Result<Outcome, CoreError> {
        // Input checks come before any network traffic.
        let record_type = spec
            .record_type
            .ok_or_else(|| CoreError::config("Missing the record type"))?;
        let value = spec
            .value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CoreError::config("Missing the record value"))?;
        let state = spec.state.ok_or_else(|| CoreError::unknown_state(None))?;
        if spec.solo && state == DesiredState::Absent {
            warn!("solo only applies with state=present; ignoring it");
        }

        let zone = self.service.get_domain(domain).await.map_err(|e| {
            if e.is_not_found() {
                CoreError::DomainNotFound {
                    domain: domain.to_owned(),
                }
            } else {
                CoreError::from(e)
            }
        })?;

        let name = normalize_record_name(record, &zone.name);
        let records = self.service.list_records(zone.id).await?;
        let matched = records
            .iter()
            .find(|r| r.name == name && r.record_type == record_type.as_ref() && r.content == value)
            .cloned();
        debug!(
            name = %name,
            record_type = %record_type,
            matched = ?matched.as_ref().map(|r| r.id),
            "resolved record"
        );

        let target = Target {
            zone: &zone,
            name: &name,
            record_type,
            value,
        };

        match state {
            DesiredState::Present => self.ensure_present(&target, spec, &records, matched).await,
            DesiredState::Absent => self.ensure_absent(&target, matched).await,
        }
    }

    async fn ensure_present(
        &self,
        target: &Target<'_>,
        spec: &RecordSpec,
        records: &[Record],
        matched: Option<Record>,
    ) -> Result<Outcome, CoreError> {
        let pruned = if spec.solo {
            self.prune_siblings(target, records, matched.as_ref()).await?
        } else {
            false
        };

        let payload = RecordPayload {
            name: target.name.to_owned(),
            record_type: target.record_type.to_string(),
            content: target.value.to_owned(),
            ttl: Some(spec.ttl).filter(|ttl| *ttl != 0),
            priority: spec.priority.filter(|p| *p != 0),
        };

        let Some(existing) = matched else {
            if self.dry_run {
                info!(name = %target.name, dry_run = true, "would create record");
                return Ok(Outcome::Changed(None));
            }
            info!(name = %target.name, record_type = %target.record_type, "creating record");
            let created = self.service.create_record(target.zone.id, &payload).await?;
            return Ok(Outcome::Changed(Some(Entity::Record(created))));
        };

        // Only fields the request actually sends can drift.
        let ttl_differs = payload.ttl.is_some_and(|ttl| ttl != existing.ttl);
        let priority_differs = payload
            .priority
            .is_some_and(|priority| existing.priority != Some(priority));
        if ttl_differs || priority_differs {
            if self.dry_run {
                info!(record_id = existing.id, dry_run = true, "would update record");
                return Ok(Outcome::Changed(None));
            }
            info!(
                record_id = existing.id,
                ttl = spec.ttl,
                priority = ?spec.priority,
                "updating record"
            );
            let updated = self
                .service
                .update_record(target.zone.id, existing.id, &payload)
                .await?;
            return Ok(Outcome::Changed(Some(Entity::Record(updated))));
        }

        let entity = Some(Entity::Record(existing));
        Ok(if pruned {
            Outcome::Changed(entity)
        } else {
            Outcome::Unchanged(entity)
        })
    }

    /// Delete every record sharing the target's name and type except the
    /// exact match. Returns whether anything was (or would be) removed.
    async fn prune_siblings(
        &self,
        target: &Target<'_>,
        records: &[Record],
        keep: Option<&Record>,
    ) -> Result<bool, CoreError> {
        let victims: Vec<u64> = records
            .iter()
            .filter(|r| r.name == target.name && r.record_type == target.record_type.as_ref())
            .filter(|r| keep.is_none_or(|k| k.id != r.id))
            .map(|r| r.id)
            .collect();
        debug!(?victims, "solo pruning candidates");

        for record_id in &victims {
            if self.dry_run {
                info!(record_id, dry_run = true, "would delete sibling record");
            } else {
                info!(record_id, "deleting sibling record");
                self.service
                    .delete_record(target.zone.id, *record_id)
                    .await?;
            }
        }

        Ok(!victims.is_empty())
    }

    async fn ensure_absent(
        &self,
        target: &Target<'_>,
        matched: Option<Record>,
    ) -> Result<Outcome, CoreError> {
        let Some(existing) = matched else {
            return Ok(Outcome::Unchanged(None));
        };

        if self.dry_run {
            info!(record_id = existing.id, dry_run = true, "would delete record");
        } else {
            info!(record_id = existing.id, name = %target.name, "deleting record");
            self.service
                .delete_record(target.zone.id, existing.id)
                .await?;
        }
        Ok(Outcome::Changed(None))
    }
}

/// The resolved record a request is about.
struct Target<'a> {
    zone: &'a Domain,
    name: &'a str,
    record_type: RecordType,
    value: &'a str,
}
