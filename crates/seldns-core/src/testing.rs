// In-memory `DnsService` for reconciler tests.
//
// Holds domains and records in a mutex-guarded store and journals every
// mutating call so tests can assert exactly what would have hit the API.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use seldns_api::{Domain, Error, Record, RecordPayload};

use crate::service::DnsService;

/// A mutating call the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateDomain(String),
    DeleteDomain(u64),
    CreateRecord(u64, RecordPayload),
    UpdateRecord(u64, u64, RecordPayload),
    DeleteRecord(u64, u64),
}

#[derive(Default)]
struct Store {
    domains: Vec<Domain>,
    records: BTreeMap<u64, Vec<Record>>,
    next_id: u64,
    calls: Vec<Call>,
    reads: usize,
    fail_status: Option<u16>,
}

impl Store {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn read(&mut self) -> Result<(), Error> {
        self.reads += 1;
        match self.fail_status {
            Some(status) => Err(Error::Api {
                status,
                message: "injected failure".into(),
            }),
            None => Ok(()),
        }
    }
}

fn not_found(what: &str) -> Error {
    Error::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[derive(Default)]
pub(crate) struct FakeDns {
    store: Mutex<Store>,
}

impl FakeDns {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1000,
                ..Store::default()
            }),
        }
    }

    pub fn with_domain(self, id: u64, name: &str) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            store.domains.push(Domain::new(id, name));
            store.records.entry(id).or_default();
        }
        self
    }

    pub fn with_record(
        self,
        domain_id: u64,
        id: u64,
        name: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Self {
        self.with_record_priority(domain_id, id, name, record_type, content, ttl, None)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_record_priority(
        self,
        domain_id: u64,
        id: u64,
        name: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
        priority: Option<u32>,
    ) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            store.records.entry(domain_id).or_default().push(Record {
                id,
                name: name.into(),
                record_type: record_type.into(),
                content: content.into(),
                ttl,
                priority,
                extra: serde_json::Map::new(),
            });
        }
        self
    }

    /// Make every read fail with the given HTTP status.
    pub fn failing_with(self, status: u16) -> Self {
        self.store.lock().unwrap().fail_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.store.lock().unwrap().calls.clone()
    }

    pub fn reads(&self) -> usize {
        self.store.lock().unwrap().reads
    }

    pub fn records(&self, domain_id: u64) -> Vec<Record> {
        self.store
            .lock()
            .unwrap()
            .records
            .get(&domain_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn domain_names(&self) -> Vec<String> {
        let store = self.store.lock().unwrap();
        store.domains.iter().map(|d| d.name.clone()).collect()
    }
}

#[async_trait]
impl DnsService for FakeDns {
    async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        let mut store = self.store.lock().unwrap();
        store.read()?;
        Ok(store.domains.clone())
    }

    async fn get_domain(&self, name_or_id: &str) -> Result<Domain, Error> {
        let mut store = self.store.lock().unwrap();
        store.read()?;
        store
            .domains
            .iter()
            .find(|d| d.name == name_or_id || d.id.to_string() == name_or_id)
            .cloned()
            .ok_or_else(|| not_found("domain"))
    }

    async fn create_domain(&self, name: &str) -> Result<Domain, Error> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::CreateDomain(name.to_owned()));
        let domain = Domain::new(store.allocate_id(), name);
        store.records.insert(domain.id, Vec::new());
        store.domains.push(domain.clone());
        Ok(domain)
    }

    async fn delete_domain(&self, domain_id: u64) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::DeleteDomain(domain_id));
        store.domains.retain(|d| d.id != domain_id);
        store.records.remove(&domain_id);
        Ok(())
    }

    async fn list_records(&self, domain_id: u64) -> Result<Vec<Record>, Error> {
        let mut store = self.store.lock().unwrap();
        store.read()?;
        store
            .records
            .get(&domain_id)
            .cloned()
            .ok_or_else(|| not_found("domain"))
    }

    async fn create_record(
        &self,
        domain_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::CreateRecord(domain_id, payload.clone()));
        let record = Record {
            id: store.allocate_id(),
            name: payload.name.clone(),
            record_type: payload.record_type.clone(),
            content: payload.content.clone(),
            ttl: payload.ttl.unwrap_or(seldns_api::models::DEFAULT_TTL),
            priority: payload.priority,
            extra: serde_json::Map::new(),
        };
        store
            .records
            .get_mut(&domain_id)
            .ok_or_else(|| not_found("domain"))?
            .push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        domain_id: u64,
        record_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        let mut store = self.store.lock().unwrap();
        store
            .calls
            .push(Call::UpdateRecord(domain_id, record_id, payload.clone()));
        let record = store
            .records
            .get_mut(&domain_id)
            .and_then(|records| records.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| not_found("record"))?;
        record.name.clone_from(&payload.name);
        record.record_type.clone_from(&payload.record_type);
        record.content.clone_from(&payload.content);
        if let Some(ttl) = payload.ttl {
            record.ttl = ttl;
        }
        if let Some(priority) = payload.priority {
            record.priority = Some(priority);
        }
        Ok(record.clone())
    }

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::DeleteRecord(domain_id, record_id));
        if let Some(records) = store.records.get_mut(&domain_id) {
            records.retain(|r| r.id != record_id);
        }
        Ok(())
    }
}
