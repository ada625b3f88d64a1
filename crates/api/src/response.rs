//! Success envelopes for the customer and vendor portals.
//!
//! Employee routes answer with route-specific bodies and need no wrapper.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

/// `{ "success": true, ...body }`.
#[derive(Debug, Serialize)]
pub struct CustomerReply<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T: Serialize> CustomerReply<Data<T>> {
    /// `{ "success": true, "data": data }`.
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            body: Data { data },
        })
    }
}

impl<T: Serialize> CustomerReply<T> {
    pub fn with(body: T) -> Json<Self> {
        Json(Self {
            success: true,
            body,
        })
    }
}

/// `{ "status": "success", ...body }`.
#[derive(Debug, Serialize)]
pub struct VendorReply<T> {
    pub status: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> VendorReply<BTreeMap<&'static str, T>> {
    /// `{ "status": "success", key: value }`.
    pub fn entity(key: &'static str, value: T) -> Json<Self> {
        Json(Self {
            status: "success",
            body: BTreeMap::from([(key, value)]),
        })
    }
}

impl<T: Serialize> VendorReply<T> {
    pub fn with(body: T) -> Json<Self> {
        Json(Self {
            status: "success",
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn customer_data_envelope() {
        let Json(reply) = CustomerReply::data(vec!["SO1"]);
        assert_eq!(
            serde_json::to_value(reply).unwrap(),
            json!({ "success": true, "data": ["SO1"] })
        );
    }

    #[test]
    fn vendor_entity_envelope() {
        let Json(reply) = VendorReply::entity("goods", Vec::<String>::new());
        assert_eq!(
            serde_json::to_value(reply).unwrap(),
            json!({ "status": "success", "goods": [] })
        );
    }
}
