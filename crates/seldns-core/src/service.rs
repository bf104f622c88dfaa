// ── DNS service seam ──
//
// The narrow surface the reconciler needs from the hosting API. Keeping it
// behind a trait lets the reconciler run against an in-memory fake.

use async_trait::async_trait;

use seldns_api::{DnsClient, Domain, Error, Record, RecordPayload};

/// Remote collections the reconciler reads and mutates.
///
/// Errors stay in API terms; `Error::is_not_found()` is how callers tell a
/// missing domain apart from a failed request.
#[async_trait]
pub trait DnsService: Send + Sync {
    async fn list_domains(&self) -> Result<Vec<Domain>, Error>;

    /// Resolve a domain by name or numeric id.
    async fn get_domain(&self, name_or_id: &str) -> Result<Domain, Error>;

    async fn create_domain(&self, name: &str) -> Result<Domain, Error>;

    async fn delete_domain(&self, domain_id: u64) -> Result<(), Error>;

    async fn list_records(&self, domain_id: u64) -> Result<Vec<Record>, Error>;

    async fn create_record(&self, domain_id: u64, payload: &RecordPayload)
    -> Result<Record, Error>;

    async fn update_record(
        &self,
        domain_id: u64,
        record_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error>;

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<(), Error>;
}

#[async_trait]
impl DnsService for DnsClient {
    async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        DnsClient::list_domains(self).await
    }

    async fn get_domain(&self, name_or_id: &str) -> Result<Domain, Error> {
        DnsClient::get_domain(self, name_or_id).await
    }

    async fn create_domain(&self, name: &str) -> Result<Domain, Error> {
        DnsClient::create_domain(self, name).await
    }

    async fn delete_domain(&self, domain_id: u64) -> Result<(), Error> {
        DnsClient::delete_domain(self, domain_id).await
    }

    async fn list_records(&self, domain_id: u64) -> Result<Vec<Record>, Error> {
        DnsClient::list_records(self, domain_id).await
    }

    async fn create_record(
        &self,
        domain_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        DnsClient::create_record(self, domain_id, payload).await
    }

    async fn update_record(
        &self,
        domain_id: u64,
        record_id: u64,
        payload: &RecordPayload,
    ) -> Result<Record, Error> {
        DnsClient::update_record(self, domain_id, record_id, payload).await
    }

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<(), Error> {
        DnsClient::delete_record(self, domain_id, record_id).await
    }
}
