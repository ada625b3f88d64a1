//! Integration tests for the SOAP and OData clients against a mock SAP system.

use sap_client::{
    Credentials, ErrorKind, ODataClient, ODataQuery, SapEndpoint, SapError, SoapClient,
    SoapRequest,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTH: &str = "Basic dXNlcjpzZWNyZXQ=";

fn endpoint(server: &MockServer, base_path: &str) -> SapEndpoint {
    SapEndpoint::new(
        format!("{}{base_path}", server.uri()),
        Credentials::new("user", "secret"),
    )
}

fn sales_envelope() -> &'static str {
    r#"<?xml version="1.0" encoding="utf-8"?>
<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/">
  <soap-env:Header/>
  <soap-env:Body>
    <n0:ZCU_SALES_FM_48Response xmlns:n0="urn:sap-com:document:sap:rfc:functions">
      <ET_SALES_RES>
        <item><VBELN>SO1</VBELN><NETWR>100.50</NETWR></item>
        <item><VBELN>SO2</VBELN><NETWR>7</NETWR></item>
      </ET_SALES_RES>
    </n0:ZCU_SALES_FM_48Response>
  </soap-env:Body>
</soap-env:Envelope>"#
}

mod soap {
    use super::*;

    #[tokio::test]
    async fn posts_envelope_and_unwraps_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sap/bc/srt/scs/sap/zsrv_cu_sales_901548"))
            .and(query_param("sap-client", "100"))
            .and(header("Authorization", AUTH))
            .and(header("Content-Type", "text/xml;charset=UTF-8"))
            .and(body_string_contains("<IV_KUNNR>0000200000</IV_KUNNR>"))
            .respond_with(ResponseTemplate::new(200).set_body_string(sales_envelope()))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SoapClient::new(endpoint(&server, "/sap/bc/srt/scs/sap/").with_client("100")).unwrap();
        let request = SoapRequest::new("ZCU_SALES_FM_48").param("IV_KUNNR", "0000200000");
        let response = client.call("zsrv_cu_sales_901548", &request).await.unwrap();

        let rows = response.items("ET_SALES_RES");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("VBELN"), Some("SO1"));
        assert_eq!(rows[1].field("NETWR"), Some("7"));
    }

    #[tokio::test]
    async fn sends_soap_action_when_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header(
                "SOAPAction",
                "urn:sap-com:document:sap:rfc:functions:Z48_EMP_LEAVE_FM",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<soap-env:Envelope xmlns:soap-env="x"><soap-env:Body>
                   <n0:Z48_EMP_LEAVE_FMResponse xmlns:n0="y"><LEAVE_DETAILS/></n0:Z48_EMP_LEAVE_FMResponse>
                   </soap-env:Body></soap-env:Envelope>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = SoapClient::new(endpoint(&server, "/")).unwrap();
        let request = SoapRequest::new("Z48_EMP_LEAVE_FM")
            .param("EMPLOYEE_ID", "00000001")
            .with_default_action();
        let response = client.call("zsrv_emp_leave_901548", &request).await.unwrap();
        assert!(response.items("LEAVE_DETAILS").is_empty());
    }

    #[tokio::test]
    async fn missing_response_element_is_structure_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(sales_envelope()))
            .mount(&server)
            .await;

        let client = SoapClient::new(endpoint(&server, "/")).unwrap();
        let err = client
            .call("svc", &SoapRequest::new("ZCU_INVOICE_FM_48"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "SAP response ZCU_INVOICE_FM_48Response not found");
    }

    #[tokio::test]
    async fn http_500_with_fault_body_is_a_fault() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(
                r#"<soap-env:Envelope xmlns:soap-env="x"><soap-env:Body><soap-env:Fault>
                   <faultcode>soap-env:Server</faultcode><faultstring>RFC_ERROR_SYSTEM_FAILURE</faultstring>
                   </soap-env:Fault></soap-env:Body></soap-env:Envelope>"#,
            ))
            .mount(&server)
            .await;

        let client = SoapClient::new(endpoint(&server, "/")).unwrap();
        match client.call("svc", &SoapRequest::new("ZCU_SALES_FM_48")).await {
            Err(SapError::Fault { code, message }) => {
                assert_eq!(code, "soap-env:Server");
                assert_eq!(message, "RFC_ERROR_SYSTEM_FAILURE");
            }
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_without_fault_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Logon failed"))
            .mount(&server)
            .await;

        let client = SoapClient::new(endpoint(&server, "/")).unwrap();
        let err = client
            .call("svc", &SoapRequest::new("ZCU_SALES_FM_48"))
            .await
            .unwrap_err();
        match &err {
            SapError::Status { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message, "Logon failed");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let endpoint = SapEndpoint::new("http://127.0.0.1:9/", Credentials::new("u", "p"));
        let client = SoapClient::new(endpoint).unwrap();
        let err = client
            .call("svc", &SoapRequest::new("ZCU_SALES_FM_48"))
            .await
            .unwrap_err();
        assert!(matches!(err, SapError::Transport(_)));
    }

    #[tokio::test]
    async fn bounded_client_still_serves_concurrent_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(sales_envelope()))
            .expect(4)
            .mount(&server)
            .await;

        let client =
            SoapClient::new(endpoint(&server, "/").max_concurrency(Some(1))).unwrap();
        let request = SoapRequest::new("ZCU_SALES_FM_48");
        let (a, b, c, d) = tokio::join!(
            client.call("svc", &request),
            client.call("svc", &request),
            client.call("svc", &request),
            client.call("svc", &request),
        );
        for result in [a, b, c, d] {
            assert_eq!(result.unwrap().items("ET_SALES_RES").len(), 2);
        }
    }
}

mod odata {
    use super::*;

    const SERVICE: &str = "/sap/opu/odata/SAP/ZSD_VENDORPORTAL_SRV";

    #[tokio::test]
    async fn filter_query_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{SERVICE}/ZMMVGOODSSet")))
            .and(query_param("$filter", "VendorId eq '0000000005'"))
            .and(query_param("$format", "json"))
            .and(header("Accept", "application/json"))
            .and(header("Authorization", AUTH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "d": { "results": [
                    { "MaterialDocNo": "5000000001", "VendorId": "0000000005" }
                ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ODataClient::new(endpoint(&server, SERVICE)).unwrap();
        let response = client
            .get(&ODataQuery::filter_eq("ZMMVGOODSSet", "VendorId", "0000000005"))
            .await
            .unwrap();

        let rows = response.results();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["MaterialDocNo"], "5000000001");
    }

    #[tokio::test]
    async fn appends_sap_client_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{SERVICE}/ZMMVPROFILESet('0000000005')")))
            .and(query_param("sap-client", "100"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "d": { "VendorId": "5" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ODataClient::new(endpoint(&server, SERVICE).with_client("100")).unwrap();
        let response = client
            .get(&ODataQuery::by_key("ZMMVPROFILESet", "0000000005"))
            .await
            .unwrap();
        assert_eq!(response.entity().unwrap()["VendorId"], "5");
    }

    #[tokio::test]
    async fn gateway_error_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": "SY/530", "message": { "lang": "en", "value": "Resource not found" } }
            })))
            .mount(&server)
            .await;

        let client = ODataClient::new(endpoint(&server, SERVICE)).unwrap();
        let err = client
            .get(&ODataQuery::by_key("ZMMVPROFILESet", "X"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "SAP returned HTTP 404: Resource not found");
    }

    #[tokio::test]
    async fn non_json_body_is_structure_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = ODataClient::new(endpoint(&server, SERVICE)).unwrap();
        let err = client
            .get(&ODataQuery::filter_eq("ZMMVRFQSet", "VendorId", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, SapError::Json(_)));
        assert_eq!(err.kind(), ErrorKind::Structure);
    }
}
