// Resource record endpoints
//
// Records are scoped under their domain id: `/{domain_id}/records/...`.

use tracing::debug;

use crate::client::DnsClient;
use crate::error::Error;
use crate::models::{Record, RecordPayload};

fn records_path(domain_id: u64) -> String {
    format!("{domain_id}/records/")
}

fn record_path(domain_id: u64, record_id: u64) -> String {
    format!("{domain_id}/records/{record_id}")
}

impl DnsClient {
    /// List every record of a domain.
    ///
    /// `GET /{domain_id}/records/`
    pub async fn list_records(&self, domain_id: u64) -> Result<Vec<Record>, Error> {
        debug!(domain_id, "listing records");
        self.get(&records_path(domain_id)).await
    }

    /// Fetch a single record.
    ///
    /// `GET /{domain_id}/records/{record_id}`
    pub async fn get_record(&self, domain_id: u64, record_id: u64) -> Result<Record, Error> {
        debug!(domain_id, record_id, "fetching record");
        self.get(&record_path(domain_id, record_id)).await
    }

    /// Create a record.
    ///
    /// `POST /{domain_id}/records/`
    pub async fn create_record(
        &self,
        domain_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        debug!(domain_id, name = %payload.name, record_type = %payload.record_type, "creating record");
        self.post(&records_path(domain_id), payload).await
    }

    /// Update a record in place.
    ///
    /// `PUT /{domain_id}/records/{record_id}`. The API may answer with
    /// `204 No Content`; the record is then re-read so callers always get
    /// the stored state back.
    pub async fn update_record(
        &self,
        domain_id: u64,
        record_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        debug!(domain_id, record_id, "updating record");
        match self.put(&record_path(domain_id, record_id), payload).await? {
            Some(record) => Ok(record),
            None => self.get_record(domain_id, record_id).await,
        }
    }

    /// Delete a record.
    ///
    /// `DELETE /{domain_id}/records/{record_id}`
    pub async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<(), Error> {
        debug!(domain_id, record_id, "deleting record");
        self.delete(&record_path(domain_id, record_id)).await
    }
}
