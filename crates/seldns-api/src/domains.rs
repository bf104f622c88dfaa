// Domain endpoints
//
// Domains live at the API root: `GET /` lists them, `GET /{name_or_id}`
// resolves one, `POST /` creates and `DELETE /{id}` removes.

use tracing::debug;

use crate::client::DnsClient;
use crate::error::Error;
use crate::models::{Domain, NewDomain};

impl DnsClient {
    /// List every domain on the account.
    ///
    /// `GET /`
    pub async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        debug!("listing domains");
        self.get("").await
    }

    /// Fetch a single domain by its name or numeric id.
    ///
    /// `GET /{name_or_id}`. A missing domain surfaces as
    /// `Error::Api { status: 404, .. }`.
    pub async fn get_domain(&self, name_or_id: &str) -> Result<Domain, Error> {
        debug!(domain = name_or_id, "fetching domain");
        self.get(name_or_id).await
    }

    /// Create a domain.
    ///
    /// `POST /` with `{"name": "..."}`
    pub async fn create_domain(&self, name: &str) -> Result<Domain, Error> {
        debug!(name, "creating domain");
        self.post("", &NewDomain { name }).await
    }

    /// Delete a domain and all its records.
    ///
    /// `DELETE /{id}`
    pub async fn delete_domain(&self, domain_id: u64) -> Result<(), Error> {
        debug!(domain_id, "deleting domain");
        self.delete(&domain_id.to_string()).await
    }
}
