//! Customer portal: SOAP function modules behind the customer gateway.

mod records;
mod service;

pub use records::{
    AgingEntry, CreditDebitMemo, CustomerLogin, CustomerProfile, Delivery, Inquiry, Invoice,
    InvoiceDocument, OverallSales, SalesOrder,
};
pub use service::{CustomerService, MemoPeriod};

use common::Padding;

use crate::record::RfcFunction;

pub const LOGIN: RfcFunction = RfcFunction {
    name: "ZCU_LOGIN_FM",
    service: "zsrv_cu_login_901548",
    id_param: "WF_CUSTOMER",
    table: "",
    padding: Padding::None,
};

pub const PROFILE: RfcFunction = RfcFunction {
    name: "ZCU_PROFILE_FM",
    service: "zsrv_cu_profile_901548",
    id_param: "KUNNR",
    table: "",
    padding: Padding::None,
};

pub const SALES: RfcFunction = RfcFunction {
    name: "ZCU_SALES_FM_48",
    service: "zsrv_cu_sales_901548",
    id_param: "KUNNR",
    table: "ET_SALES_RES",
    padding: Padding::SAP_KEY,
};

pub const INQUIRY: RfcFunction = RfcFunction {
    name: "ZCU_INQUIRY2_FM_48",
    service: "zsrv_cu_inquiry2_901548",
    id_param: "KUNNR",
    table: "ET_INQUIRY_RES",
    padding: Padding::SAP_KEY,
};

pub const DELIVERY: RfcFunction = RfcFunction {
    name: "ZCU_DELIVERY_FM_48",
    service: "zsrv_cu_del_901548",
    id_param: "KUNNR",
    table: "ET_DELIVERY_RES",
    padding: Padding::SAP_KEY,
};

pub const AGING: RfcFunction = RfcFunction {
    name: "ZCU_AGING_FM_48",
    service: "zsrv_cu_aging_901548",
    id_param: "KUNNR",
    table: "ET_AGING_DATA",
    padding: Padding::None,
};

pub const INVOICES: RfcFunction = RfcFunction {
    name: "ZCU_INVOICE_FM_48",
    service: "zsrv_cu_invoice_901548",
    id_param: "KUNNR",
    table: "ET_INVOICE_RES",
    padding: Padding::SAP_KEY,
};

pub const OVERALL_SALES: RfcFunction = RfcFunction {
    name: "ZCU_CUST_OVERALL_FM_48",
    service: "zsrv_cu_overall_901548",
    id_param: "IV_KUNNR",
    table: "ET_OVERALL_DATA",
    padding: Padding::SAP_KEY,
};

pub const MEMOS: RfcFunction = RfcFunction {
    name: "ZCU_CUST_MEMO2_FM_48",
    service: "zsrv_cu_memo2_901548",
    id_param: "IV_KUNNR",
    table: "ET_MEMO_DATA",
    padding: Padding::None,
};

pub const INVOICE_PDF: RfcFunction = RfcFunction {
    name: "ZCU_INVOICEPDF_FM_48",
    service: "zsrv_cu_invoicepdf2_901548",
    id_param: "P_VBELN",
    table: "",
    padding: Padding::None,
};
