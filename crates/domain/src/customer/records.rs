//! Customer portal records.
//!
//! Key names follow what the portal frontend already reads, including the
//! snake_case keys some tables use (`due_dt`, `item_netwr`, `record_type`).

use sap_client::XmlNode;
use serde::Serialize;

use crate::record::{FromSoapItem, integer, number, text};

/// Result of `ZCU_LOGIN_FM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLogin {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl CustomerLogin {
    const VERIFIED: &'static str = "Successful";

    /// Builds the login outcome from SAP's `WF_VERIFY` value.
    pub fn from_verification(verify: Option<&str>, customer_id: impl Into<String>) -> Self {
        let message = verify
            .filter(|v| !v.is_empty())
            .unwrap_or("Unknown")
            .to_string();
        Self {
            status: message == Self::VERIFIED,
            message,
            customer_id: Some(customer_id.into()),
        }
    }

    /// Outcome reported when SAP could not be asked.
    pub fn connection_failed() -> Self {
        Self {
            status: false,
            message: "SAP connection failed".to_string(),
            customer_id: None,
        }
    }
}

/// Export parameters of `ZCU_PROFILE_FM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    pub name1: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

impl FromSoapItem for CustomerProfile {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            name1: text(item, "EV_NAME1"),
            street: text(item, "EV_STREET"),
            city: text(item, "EV_CITY"),
            postcode: text(item, "EV_POSTCODE"),
            country: text(item, "EV_COUNTRY"),
        }
    }
}

/// Row of `ET_SALES_RES`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesOrder {
    pub vbeln: String,
    pub erdat: String,
    pub auart: String,
    pub netwr: f64,
    pub waerk: String,
    pub vdatu: String,
    pub ernam: String,
    pub posnr: String,
    pub matnr: String,
    pub arktx: String,
    pub kwmeng: f64,
    pub vrkme: String,
}

impl FromSoapItem for SalesOrder {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            vbeln: text(item, "VBELN"),
            erdat: text(item, "ERDAT"),
            auart: text(item, "AUART"),
            netwr: number(item, "NETWR"),
            waerk: text(item, "WAERK"),
            vdatu: text(item, "VDATU"),
            ernam: text(item, "ERNAM"),
            posnr: text(item, "POSNR"),
            matnr: text(item, "MATNR"),
            arktx: text(item, "ARKTX"),
            kwmeng: number(item, "KWMENG"),
            vrkme: text(item, "VRKME"),
        }
    }
}

/// Row of `ET_INQUIRY_RES`. Amounts stay as SAP formatted them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    pub vbeln: String,
    pub erdat: String,
    pub auart: String,
    pub netwr: String,
    pub waerk: String,
    pub vdate: String,
    pub posnr: String,
    pub matnr: String,
    pub arktx: String,
    pub kwmeng: String,
    pub vrkme: String,
}

impl FromSoapItem for Inquiry {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            vbeln: text(item, "VBELN"),
            erdat: text(item, "ERDAT"),
            auart: text(item, "AUART"),
            netwr: text(item, "NETWR"),
            waerk: text(item, "WAERK"),
            vdate: text(item, "VDATU"),
            posnr: text(item, "POSNR"),
            matnr: text(item, "MATNR"),
            arktx: text(item, "ARKTX"),
            kwmeng: text(item, "KWMENG"),
            vrkme: text(item, "VRKME"),
        }
    }
}

/// Row of `ET_DELIVERY_RES`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub vbeln: String,
    pub erdat: String,
    pub vstel: String,
    pub vkorg: String,
    pub lfart: String,
    pub lfdat: String,
    pub posnr: String,
    pub matnr: String,
    pub arktx: String,
    pub lfimg: String,
}

impl FromSoapItem for Delivery {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            vbeln: text(item, "VBELN"),
            erdat: text(item, "ERDAT"),
            vstel: text(item, "VSTEL"),
            vkorg: text(item, "VKORG"),
            lfart: text(item, "LFART"),
            lfdat: text(item, "LFDAT"),
            posnr: text(item, "POSNR"),
            matnr: text(item, "MATNR"),
            arktx: text(item, "ARKTX"),
            lfimg: text(item, "LFIMG"),
        }
    }
}

/// Row of `ET_AGING_DATA`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgingEntry {
    pub vbeln: String,
    pub fkdat: String,
    pub due_dt: String,
    pub netwr: String,
    pub waerk: String,
    pub aging: String,
    pub meaning: String,
}

impl FromSoapItem for AgingEntry {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            vbeln: text(item, "VBELN"),
            fkdat: text(item, "FKDAT"),
            due_dt: text(item, "DUE_DT"),
            netwr: text(item, "NETWR"),
            waerk: text(item, "WAERK"),
            aging: text(item, "AGING"),
            meaning: text(item, "MEANING"),
        }
    }
}

/// Row of `ET_INVOICE_RES`: billing header fields repeated per item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub vbeln: String,
    pub fkdat: String,
    pub waerk: String,
    pub netwr: f64,
    pub kunag: String,
    pub vkorg: String,
    pub knumv: String,
    pub fkart: String,
    pub posnr: String,
    pub matnr: String,
    pub arktx: String,
    pub fkimg: f64,
    pub vrkme: String,
    pub item_netwr: f64,
    pub prsdt: String,
    pub erdat: String,
    pub ernam: String,
}

impl FromSoapItem for Invoice {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            vbeln: text(item, "VBELN"),
            fkdat: text(item, "FKDAT"),
            waerk: text(item, "WAERK"),
            netwr: number(item, "NETWR"),
            kunag: text(item, "KUNAG"),
            vkorg: text(item, "VKORG"),
            knumv: text(item, "KNUMV"),
            fkart: text(item, "FKART"),
            posnr: text(item, "POSNR"),
            matnr: text(item, "MATNR"),
            arktx: text(item, "ARKTX"),
            fkimg: number(item, "FKIMG"),
            vrkme: text(item, "VRKME"),
            item_netwr: number(item, "ITEM_NETWR"),
            prsdt: text(item, "PRSDT"),
            erdat: text(item, "ERDAT"),
            ernam: text(item, "ERNAM"),
        }
    }
}

/// Row of `ET_OVERALL_DATA`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSales {
    pub waerk: String,
    pub auart: String,
    pub kunnr: String,
    pub vkorg: String,
    pub record_type: String,
    pub document_no: String,
    pub doc_date: String,
    pub total_orders: i64,
    pub total_order_value: f64,
    pub total_billed: f64,
}

impl FromSoapItem for OverallSales {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            waerk: text(item, "WAERK"),
            auart: text(item, "AUART"),
            kunnr: text(item, "KUNNR"),
            vkorg: text(item, "VKORG"),
            record_type: text(item, "RECORD_TYPE"),
            document_no: text(item, "DOCUMENT_NO"),
            doc_date: text(item, "DOC_DATE"),
            total_orders: integer(item, "TOTAL_ORDERS"),
            total_order_value: number(item, "TOTAL_ORDER_VALUE"),
            total_billed: number(item, "TOTAL_BILLED"),
        }
    }
}

/// Row of `ET_MEMO_DATA`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditDebitMemo {
    pub memo_id: String,
    pub memo_type: String,
    pub reference_doc: String,
    pub customer_id: String,
    pub customer_name: String,
    pub billing_date: String,
    pub created_date: String,
    pub created_by: String,
    pub currency: String,
    pub net_value: String,
    pub tax_amount: String,
    pub sales_org: String,
    pub dist_channel: String,
    pub division: String,
    pub memo_direction: String,
}

impl FromSoapItem for CreditDebitMemo {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            memo_id: text(item, "WF_MEMO_ID"),
            memo_type: text(item, "WF_MEMO_TYPE"),
            reference_doc: text(item, "WF_REFERENCE_DOC"),
            customer_id: text(item, "WF_CUSTOMER_ID"),
            customer_name: text(item, "WF_CUSTOMER_NAME"),
            billing_date: text(item, "WF_BILLING_DATE"),
            created_date: text(item, "WF_CREATED_DATE"),
            created_by: text(item, "WF_CREATED_BY"),
            currency: text(item, "WF_CURRENCY"),
            net_value: text(item, "WF_NET_VALUE"),
            tax_amount: text(item, "WF_TAX_AMOUNT"),
            sales_org: text(item, "WF_SALES_ORG"),
            dist_channel: text(item, "WF_DIST_CHANNEL"),
            division: text(item, "WF_DIVISION"),
            memo_direction: text(item, "WF_MEMO_DIRECTION"),
        }
    }
}

/// Base64 PDF of one billing document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDocument {
    pub filename: String,
    pub base64: String,
}

impl InvoiceDocument {
    pub fn new(vbeln: &str, base64: impl Into<String>) -> Self {
        Self {
            filename: format!("Invoice_{vbeln}.pdf"),
            base64: base64.into(),
        }
    }
}
