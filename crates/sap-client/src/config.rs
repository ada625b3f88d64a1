//! Connection settings for one SAP endpoint.

use url::Url;

use crate::error::{Result, SapError};

/// Basic Auth credentials for SAP.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One SAP system as seen by a gateway.
///
/// For SOAP endpoints `base_url` is the SRT/ICF prefix the service name is
/// appended to (e.g. `http://host:8000/sap/bc/srt/scs/sap/`). For OData it is
/// the service root (e.g. `https://host:44300/sap/opu/odata/SAP/ZSD_VENDORPORTAL_SRV`).
#[derive(Debug, Clone)]
pub struct SapEndpoint {
    pub base_url: String,
    /// SAP client (mandant) sent as the `sap-client` query parameter.
    pub client: Option<String>,
    pub credentials: Credentials,
    /// Skip TLS certificate verification (self-signed development systems).
    pub accept_invalid_certs: bool,
    /// Upper bound on in-flight calls to this endpoint; `None` is unbounded.
    pub max_concurrency: Option<usize>,
}

impl SapEndpoint {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            client: None,
            credentials,
            accept_invalid_certs: false,
            max_concurrency: None,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    pub fn max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|n| *n > 0);
        self
    }

    /// URL of a SOAP service: `<base_url><service>?sap-client=<client>`.
    pub fn service_url(&self, service: &str) -> Result<Url> {
        let mut raw = self.base_url.trim_end_matches('/').to_string();
        raw.push('/');
        raw.push_str(service.trim_start_matches('/'));

        let mut url = Url::parse(&raw).map_err(|e| SapError::InvalidUrl(format!("{raw}: {e}")))?;
        if let Some(client) = &self.client {
            url.query_pairs_mut().append_pair("sap-client", client);
        }
        Ok(url)
    }

    /// Base URL with any trailing slash removed, for appending OData resource paths.
    pub fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
