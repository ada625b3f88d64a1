use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sap_client::{ODataQuery, SoapRequest, parse_document, unwrap_response};

fn sales_envelope(rows: usize) -> String {
    let mut items = String::new();
    for i in 0..rows {
        items.push_str(&format!(
            "<item><VBELN>{i:010}</VBELN><ERDAT>2024-01-15</ERDAT><AUART>OR</AUART>\
             <NETWR>{i}.50</NETWR><WAERK>INR</WAERK><MATNR>MAT-{i}</MATNR>\
             <ARKTX>Steel rod &amp; fittings</ARKTX><KWMENG>3.000</KWMENG><VRKME>EA</VRKME></item>"
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/"><soap-env:Header/><soap-env:Body><n0:ZCU_SALES_FM_48Response xmlns:n0="urn:sap-com:document:sap:rfc:functions"><ET_SALES_RES>{items}</ET_SALES_RES></n0:ZCU_SALES_FM_48Response></soap-env:Body></soap-env:Envelope>"#
    )
}

fn bench_unwrap_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope/unwrap_response");
    for rows in [1, 100, 1000] {
        let xml = sales_envelope(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &xml, |b, xml| {
            b.iter(|| {
                let response = unwrap_response(xml, "ZCU_SALES_FM_48").unwrap();
                response.items("ET_SALES_RES").len()
            });
        });
    }
    group.finish();
}

fn bench_parse_document(c: &mut Criterion) {
    let xml = sales_envelope(100);
    c.bench_function("xml/parse_document_100_rows", |b| {
        b.iter(|| parse_document(&xml).unwrap());
    });
}

fn bench_build_request(c: &mut Criterion) {
    c.bench_function("soap/build_request", |b| {
        b.iter(|| {
            SoapRequest::new("ZCU_CUST_MEMO2_FM_48")
                .param("IV_KUNNR", "0000200000")
                .param("IV_DATE_FROM", "20240101")
                .param("IV_DATE_TO", "20241231")
                .to_xml()
        });
    });
}

fn bench_odata_url(c: &mut Criterion) {
    let root = "https://sap.local:44300/sap/opu/odata/SAP/ZSD_VENDORPORTAL_SRV";
    c.bench_function("odata/filter_url", |b| {
        b.iter(|| {
            ODataQuery::filter_eq("ZMMVGOODSSet", "VendorId", "0000000005")
                .url(root)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_unwrap_response,
    bench_parse_document,
    bench_build_request,
    bench_odata_url
);
criterion_main!(benches);
