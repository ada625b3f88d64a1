//! SOAP 1.1 request envelopes for SAP RFC-wrapper services.

use quick_xml::escape::escape;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace SAP uses for RFC function modules exposed as web services.
pub const RFC_NS: &str = "urn:sap-com:document:sap:rfc:functions";

/// A call to one SAP function module.
///
/// Parameters are emitted in insertion order. Values are XML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    function: String,
    params: Vec<(String, String)>,
    soap_action: Option<String>,
}

impl SoapRequest {
    /// Creates a request for `function` in the RFC namespace.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            params: Vec::new(),
            soap_action: None,
        }
    }

    /// Appends a scalar import parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Sets an explicit `SOAPAction` header value.
    pub fn soap_action(mut self, action: impl Into<String>) -> Self {
        self.soap_action = Some(action.into());
        self
    }

    /// Sets `SOAPAction` to `<rfc namespace>:<function>`, the form SAP PI/PO expects.
    pub fn with_default_action(self) -> Self {
        let action = format!("{RFC_NS}:{}", self.function);
        self.soap_action(action)
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn action(&self) -> Option<&str> {
        self.soap_action.as_deref()
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Renders the envelope.
    pub fn to_xml(&self) -> String {
        let mut body = String::new();
        for (name, value) in &self.params {
            body.push_str(&format!("<{name}>{}</{name}>", escape(value.as_str())));
        }

        format!(
            concat!(
                r#"<soapenv:Envelope xmlns:soapenv="{env}" xmlns:urn="{ns}">"#,
                "<soapenv:Header/>",
                "<soapenv:Body>",
                "<urn:{function}>{body}</urn:{function}>",
                "</soapenv:Body>",
                "</soapenv:Envelope>"
            ),
            env = SOAP_ENV_NS,
            ns = RFC_NS,
            function = self.function,
            body = body,
        )
    }
}
