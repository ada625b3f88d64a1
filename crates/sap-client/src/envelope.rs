//! Unwrapping SAP SOAP responses.
//!
//! SAP systems disagree on the envelope prefix (`soapenv:`, `soap-env:`,
//! `SOAP-ENV:`) and on the prefix of the function response (`n0:` or none).
//! Every lookup here matches on the local element name so the same payload
//! unwraps identically whatever prefixes were used.

use crate::error::{Result, SapError};
use crate::xml::{XmlNode, parse_document};

/// The `<Function>Response` element of a successful SOAP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    element: XmlNode,
}

impl SoapResponse {
    pub fn new(element: XmlNode) -> Self {
        Self { element }
    }

    /// The response element itself.
    pub fn element(&self) -> &XmlNode {
        &self.element
    }

    /// Text of an export parameter.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.element.field(name)
    }

    /// Rows of a table parameter, always as a list.
    pub fn items(&self, table: &str) -> Vec<&XmlNode> {
        self.element.items(table)
    }

    /// Returns true if the table parameter is present in the response.
    pub fn has_table(&self, table: &str) -> bool {
        self.element.child(table).is_some()
    }
}

/// Parses `xml` and extracts the `<function>Response` element.
///
/// Fails with [`SapError::Structure`] if the envelope, body or response
/// element cannot be found, and with [`SapError::Fault`] if the body carries
/// a SOAP fault.
pub fn unwrap_response(xml: &str, function: &str) -> Result<SoapResponse> {
    let root = parse_document(xml)?;
    if root.local_name() != "Envelope" {
        return Err(SapError::structure("SOAP Envelope not found"));
    }

    let body = root
        .child("Body")
        .ok_or_else(|| SapError::structure("SOAP Body not found"))?;

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    let expected = format!("{function}Response");
    let element = body
        .child(&expected)
        .ok_or_else(|| SapError::structure(format!("SAP response {expected} not found")))?;

    Ok(SoapResponse::new(element.clone()))
}

fn fault_error(fault: &XmlNode) -> SapError {
    let code = fault.field("faultcode").unwrap_or_default().trim().to_string();
    let message = fault
        .field("faultstring")
        .unwrap_or_default()
        .trim()
        .to_string();
    SapError::Fault {
        code: if code.is_empty() { "unknown".to_string() } else { code },
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(env_prefix: &str, response_prefix: &str, rows: &str) -> String {
        let p = env_prefix;
        let r = response_prefix;
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<{p}:Envelope xmlns:{p}="http://schemas.xmlsoap.org/soap/envelope/">
  <{p}:Header/>
  <{p}:Body>
    <{r}ZCU_SALES_FM_48Response xmlns:n0="urn:sap-com:document:sap:rfc:functions">
      <ET_SALES_RES>{rows}</ET_SALES_RES>
    </{r}ZCU_SALES_FM_48Response>
  </{p}:Body>
</{p}:Envelope>"#
        )
    }

    const TWO_ROWS: &str = "<item><VBELN>SO1</VBELN></item><item><VBELN>SO2</VBELN></item>";

    fn vbelns(response: &SoapResponse) -> Vec<String> {
        response
            .items("ET_SALES_RES")
            .iter()
            .map(|i| i.field("VBELN").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn prefix_variants_unwrap_identically() {
        let variants = [
            ("soapenv", ""),
            ("soap-env", "n0:"),
            ("SOAP-ENV", "n0:"),
            ("env", ""),
        ];
        let baseline = vbelns(
            &unwrap_response(&envelope("soapenv", "", TWO_ROWS), "ZCU_SALES_FM_48").unwrap(),
        );
        assert_eq!(baseline, ["SO1", "SO2"]);

        for (env, resp) in variants {
            let response =
                unwrap_response(&envelope(env, resp, TWO_ROWS), "ZCU_SALES_FM_48").unwrap();
            assert_eq!(vbelns(&response), baseline, "prefix {env}/{resp}");
        }
    }

    #[test]
    fn single_item_is_a_one_element_list() {
        let xml = envelope("soap-env", "n0:", "<item><VBELN>SO1</VBELN></item>");
        let response = unwrap_response(&xml, "ZCU_SALES_FM_48").unwrap();
        assert_eq!(vbelns(&response), ["SO1"]);
    }

    #[test]
    fn empty_table_is_an_empty_list() {
        let response = unwrap_response(&envelope("soapenv", "", ""), "ZCU_SALES_FM_48").unwrap();
        assert!(response.has_table("ET_SALES_RES"));
        assert!(response.items("ET_SALES_RES").is_empty());
    }

    #[test]
    fn missing_response_element_is_a_structure_error() {
        let xml = envelope("soapenv", "", TWO_ROWS);
        let err = unwrap_response(&xml, "ZCU_INVOICE_FM_48").unwrap_err();
        match err {
            SapError::Structure(msg) => assert!(msg.contains("ZCU_INVOICE_FM_48Response")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn response_match_is_anchored_to_local_name() {
        // A longer function name that merely contains the expected one must not match.
        let xml = envelope("soapenv", "", TWO_ROWS)
            .replace("ZCU_SALES_FM_48Response", "XZCU_SALES_FM_48Response");
        assert!(matches!(
            unwrap_response(&xml, "ZCU_SALES_FM_48").unwrap_err(),
            SapError::Structure(_)
        ));
    }

    #[test]
    fn missing_body_is_a_structure_error() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="x"><soapenv:Header/></soapenv:Envelope>"#;
        let err = unwrap_response(xml, "ZCU_SALES_FM_48").unwrap_err();
        assert_eq!(err.to_string(), "SOAP Body not found");
    }

    #[test]
    fn non_envelope_root_is_a_structure_error() {
        let err = unwrap_response("<html><body/></html>", "ZCU_SALES_FM_48").unwrap_err();
        assert_eq!(err.to_string(), "SOAP Envelope not found");
    }

    #[test]
    fn soap_fault_is_reported() {
        let xml = r#"<soap-env:Envelope xmlns:soap-env="x"><soap-env:Body>
            <soap-env:Fault><faultcode>soap-env:Client</faultcode>
            <faultstring xml:lang="en">Function module not found</faultstring></soap-env:Fault>
            </soap-env:Body></soap-env:Envelope>"#;
        match unwrap_response(xml, "ZCU_SALES_FM_48").unwrap_err() {
            SapError::Fault { code, message } => {
                assert_eq!(code, "soap-env:Client");
                assert_eq!(message, "Function module not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_xml_is_reported() {
        assert!(matches!(
            unwrap_response("<soapenv:Envelope>", "ZCU_SALES_FM_48").unwrap_err(),
            SapError::Xml(_)
        ));
    }
}
