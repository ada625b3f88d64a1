//! Domain layer for the SAP portal gateways.
//!
//! This crate provides:
//! - Record types for every SAP function and OData entity set the portals read
//! - Field mappers from SAP rows to those records (`FromSoapItem`, `FromODataEntry`)
//! - One service per portal that builds the SAP call, runs it and maps the rows

pub mod customer;
pub mod employee;
pub mod error;
pub mod record;
pub mod vendor;

pub use customer::{
    AgingEntry, CreditDebitMemo, CustomerLogin, CustomerProfile, CustomerService, Delivery,
    Inquiry, Invoice, InvoiceDocument, MemoPeriod, OverallSales, SalesOrder,
};
pub use employee::{EmployeeLogin, EmployeeProfile, EmployeeService, LeaveRecord, Payslip};
pub use error::DomainError;
pub use record::{FromODataEntry, FromSoapItem, RfcFunction};
pub use vendor::{
    GoodsReceipt, PurchaseOrder, Rfq, VendorAging, VendorInvoice, VendorInvoicePdf, VendorMemo,
    VendorProfile, VendorService,
};
