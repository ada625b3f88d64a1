//! SAP transport and payload plumbing for the portal gateways.
//!
//! Two pipelines share this crate:
//! - SOAP: [`SoapRequest`] → [`SoapClient::call`] → [`unwrap_response`] → [`XmlNode`] rows
//! - OData: [`ODataQuery`] → [`ODataClient::get`] → [`ODataResponse`] rows
//!
//! Every call is a single attempt; failures surface as [`SapError`].

pub mod config;
pub mod envelope;
pub mod error;
pub mod odata;
pub mod soap;
pub mod transport;
pub mod xml;

pub use config::{Credentials, SapEndpoint};
pub use envelope::{SoapResponse, unwrap_response};
pub use error::{ErrorKind, Result, SapError};
pub use odata::{ODataQuery, ODataResponse};
pub use soap::SoapRequest;
pub use transport::{ODataClient, SoapClient};
pub use xml::{XmlNode, parse_document};
