//! HTTP transport to SAP.
//!
//! One request per call, no retries, reqwest's default timeouts. An optional
//! per-endpoint semaphore bounds the number of in-flight calls.

use std::sync::Arc;
use std::time::Instant;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::config::SapEndpoint;
use crate::envelope::{SoapResponse, unwrap_response};
use crate::error::{Result, SapError};
use crate::odata::{self, ODataQuery, ODataResponse};
use crate::soap::SoapRequest;

const SOAP_CONTENT_TYPE: &str = "text/xml;charset=UTF-8";
const ERROR_SNIPPET_LEN: usize = 200;

#[derive(Clone)]
struct HttpTransport {
    client: reqwest::Client,
    endpoint: Arc<SapEndpoint>,
    limiter: Option<Arc<Semaphore>>,
}

impl HttpTransport {
    fn new(endpoint: SapEndpoint) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(endpoint.accept_invalid_certs)
            .build()?;
        let limiter = endpoint
            .max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)));

        Ok(Self {
            client,
            endpoint: Arc::new(endpoint),
            limiter,
        })
    }

    /// Sends one authenticated request and returns the status and body text.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<(StatusCode, String)> {
        // The semaphore is never closed, so a failed acquire cannot happen.
        let _permit = match &self.limiter {
            Some(limit) => limit.acquire().await.ok(),
            None => None,
        };

        let credentials = &self.endpoint.credentials;
        let request = builder
            .basic_auth(&credentials.username, Some(&credentials.password))
            .build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending SAP request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%method, %url, %status, bytes = body.len(), "received SAP response");

        Ok((status, body))
    }
}

fn status_error(status: StatusCode, body: &str) -> SapError {
    let message = odata::error_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("no response body").to_string()
        } else {
            trimmed.chars().take(ERROR_SNIPPET_LEN).collect()
        }
    });
    SapError::Status {
        status: status.as_u16(),
        message,
    }
}

fn record<T>(protocol: &'static str, started: Instant, result: &Result<T>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(err) => err.kind().as_str(),
    };
    metrics::counter!("sap_requests_total", "protocol" => protocol, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("sap_request_duration_seconds", "protocol" => protocol)
        .record(started.elapsed().as_secs_f64());
}

/// Client for SAP SOAP (RFC web service) endpoints.
#[derive(Clone)]
pub struct SoapClient {
    transport: HttpTransport,
}

impl SoapClient {
    pub fn new(endpoint: SapEndpoint) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(endpoint)?,
        })
    }

    /// Posts `request` to `service` and unwraps the function response.
    #[tracing::instrument(skip(self, request), fields(function = request.function()))]
    pub async fn call(&self, service: &str, request: &SoapRequest) -> Result<SoapResponse> {
        let started = Instant::now();
        let result = self.call_inner(service, request).await;
        record("soap", started, &result);
        result
    }

    async fn call_inner(&self, service: &str, request: &SoapRequest) -> Result<SoapResponse> {
        let url = self.transport.endpoint.service_url(service)?;
        let mut builder = self
            .transport
            .client
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .body(request.to_xml());
        if let Some(action) = request.action() {
            builder = builder.header("SOAPAction", action);
        }

        let (status, body) = self.transport.execute(builder).await?;
        if !status.is_success() {
            // SAP reports RFC faults as HTTP 500 with a SOAP fault body.
            return match unwrap_response(&body, request.function()) {
                Err(fault @ SapError::Fault { .. }) => Err(fault),
                _ => Err(status_error(status, &body)),
            };
        }

        unwrap_response(&body, request.function())
    }
}

/// Client for SAP Gateway OData v2 services.
#[derive(Clone)]
pub struct ODataClient {
    transport: HttpTransport,
}

impl ODataClient {
    pub fn new(endpoint: SapEndpoint) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(endpoint)?,
        })
    }

    /// Runs `query` and parses the JSON body.
    #[tracing::instrument(skip(self, query), fields(entity_set = query.entity_set()))]
    pub async fn get(&self, query: &ODataQuery) -> Result<ODataResponse> {
        let started = Instant::now();
        let result = self.get_inner(query).await;
        record("odata", started, &result);
        result
    }

    async fn get_inner(&self, query: &ODataQuery) -> Result<ODataResponse> {
        let endpoint = &self.transport.endpoint;
        let mut url = query.url(endpoint.root())?;
        if let Some(client) = &endpoint.client {
            url.query_pairs_mut().append_pair("sap-client", client);
        }

        let builder = self
            .transport
            .client
            .get(url)
            .header(ACCEPT, "application/json");

        let (status, body) = self.transport.execute(builder).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let value: Value = serde_json::from_str(&body)?;
        Ok(ODataResponse::new(value))
    }
}
