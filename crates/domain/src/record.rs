//! Field mapping primitives shared by every portal.
//!
//! Each record type maps one SAP row through an explicit field table. The
//! helpers here guarantee the output never carries a missing value: absent
//! strings become `""` and absent numbers become `0`.

use common::{Padding, parse_integer, parse_numeric};
use sap_client::{SoapRequest, XmlNode};
use serde_json::Value;

/// Maps one SOAP table row (an `item` element) or response element to a record.
pub trait FromSoapItem: Sized {
    fn from_item(item: &XmlNode) -> Self;
}

/// Maps one OData entity (a `d.results` entry or `d`) to a record.
pub trait FromODataEntry: Sized {
    fn from_entry(entry: &Value) -> Self;
}

/// An SAP function module and the SOAP service that exposes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfcFunction {
    /// Function module name, e.g. `ZCU_SALES_FM_48`.
    pub name: &'static str,
    /// Service path below the SOAP base URL.
    pub service: &'static str,
    /// Import parameter carrying the caller's identifier.
    pub id_param: &'static str,
    /// Table parameter holding the result rows, or `""` for scalar results.
    pub table: &'static str,
    /// How the identifier is normalized before it is sent.
    pub padding: Padding,
}

impl RfcFunction {
    /// Starts a request carrying the normalized identifier.
    pub fn request(&self, id: &str) -> SoapRequest {
        SoapRequest::new(self.name).param(self.id_param, common::normalize_id(id, self.padding))
    }
}

/// Text of `field`, or `""` if the element is absent.
pub fn text(node: &XmlNode, field: &str) -> String {
    node.field(field).unwrap_or_default().to_string()
}

/// Amount or quantity in `field`; `0` when absent or unparseable.
pub fn number(node: &XmlNode, field: &str) -> f64 {
    parse_numeric(node.field(field))
}

/// Count in `field`; `0` when absent or unparseable.
pub fn integer(node: &XmlNode, field: &str) -> i64 {
    parse_integer(node.field(field))
}

/// Property `field` of an OData entity as a string; `""` when absent or null.
pub fn entry_text(entry: &Value, field: &str) -> String {
    match entry.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Maps every row with `T`'s field table.
pub fn map_items<T: FromSoapItem>(items: &[&XmlNode]) -> Vec<T> {
    items.iter().map(|item| T::from_item(item)).collect()
}

/// Maps every entity with `T`'s field table.
pub fn map_entries<T: FromODataEntry>(entries: &[&Value]) -> Vec<T> {
    entries.iter().map(|entry| T::from_entry(entry)).collect()
}
