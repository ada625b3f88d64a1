//! Customer service: one SOAP call per portal view.

use sap_client::{SoapClient, SoapRequest, SoapResponse};

use super::records::{
    AgingEntry, CreditDebitMemo, CustomerLogin, CustomerProfile, Delivery, Inquiry, Invoice,
    InvoiceDocument, OverallSales, SalesOrder,
};
use super::{
    AGING, DELIVERY, INQUIRY, INVOICE_PDF, INVOICES, LOGIN, MEMOS, OVERALL_SALES, PROFILE, SALES,
};
use crate::error::DomainError;
use crate::record::{FromSoapItem, RfcFunction, map_items};

/// Optional billing-date window for credit/debit memos (`YYYYMMDD`, empty for open).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoPeriod {
    pub from: String,
    pub to: String,
}

/// Reads customer portal data through the customer SOAP services.
#[derive(Clone)]
pub struct CustomerService {
    client: SoapClient,
}

impl CustomerService {
    /// Creates a service calling SAP through `client`.
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    async fn call(
        &self,
        function: &RfcFunction,
        request: SoapRequest,
    ) -> Result<SoapResponse, DomainError> {
        Ok(self.client.call(function.service, &request).await?)
    }

    async fn rows<T: FromSoapItem>(
        &self,
        function: &RfcFunction,
        kunnr: &str,
    ) -> Result<Vec<T>, DomainError> {
        let response = self.call(function, function.request(kunnr)).await?;
        let rows = map_items(&response.items(function.table));
        tracing::debug!(function = function.name, rows = rows.len(), "mapped SAP rows");
        Ok(rows)
    }

    /// Verifies portal credentials with `ZCU_LOGIN_FM`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        customer_id: &str,
        password: &str,
    ) -> Result<CustomerLogin, DomainError> {
        let request = LOGIN.request(customer_id).param("WF_PASSWORD", password);
        let response = self.call(&LOGIN, request).await?;
        Ok(CustomerLogin::from_verification(
            response.field("WF_VERIFY"),
            customer_id,
        ))
    }

    /// Reads the customer master address.
    #[tracing::instrument(skip(self))]
    pub async fn profile(&self, kunnr: &str) -> Result<CustomerProfile, DomainError> {
        let response = self.call(&PROFILE, PROFILE.request(kunnr)).await?;
        Ok(CustomerProfile::from_item(response.element()))
    }

    /// Lists sales order items.
    #[tracing::instrument(skip(self))]
    pub async fn sales(&self, kunnr: &str) -> Result<Vec<SalesOrder>, DomainError> {
        self.rows(&SALES, kunnr).await
    }

    /// Lists inquiry items.
    #[tracing::instrument(skip(self))]
    pub async fn inquiries(&self, kunnr: &str) -> Result<Vec<Inquiry>, DomainError> {
        self.rows(&INQUIRY, kunnr).await
    }

    /// Lists outbound delivery items.
    #[tracing::instrument(skip(self))]
    pub async fn deliveries(&self, kunnr: &str) -> Result<Vec<Delivery>, DomainError> {
        self.rows(&DELIVERY, kunnr).await
    }

    /// Lists open items with their aging bucket.
    #[tracing::instrument(skip(self))]
    pub async fn aging(&self, kunnr: &str) -> Result<Vec<AgingEntry>, DomainError> {
        self.rows(&AGING, kunnr).await
    }

    /// Lists billing document items.
    #[tracing::instrument(skip(self))]
    pub async fn invoices(&self, kunnr: &str) -> Result<Vec<Invoice>, DomainError> {
        self.rows(&INVOICES, kunnr).await
    }

    /// Lists order and billing totals.
    #[tracing::instrument(skip(self))]
    pub async fn overall_sales(&self, kunnr: &str) -> Result<Vec<OverallSales>, DomainError> {
        self.rows(&OVERALL_SALES, kunnr).await
    }

    /// Lists credit and debit memos, optionally limited to a billing-date window.
    #[tracing::instrument(skip(self))]
    pub async fn memos(
        &self,
        kunnr: &str,
        period: &MemoPeriod,
    ) -> Result<Vec<CreditDebitMemo>, DomainError> {
        let request = MEMOS
            .request(kunnr)
            .param("IV_DATE_FROM", period.from.as_str())
            .param("IV_DATE_TO", period.to.as_str());
        let response = self.call(&MEMOS, request).await?;
        Ok(map_items(&response.items(MEMOS.table)))
    }

    /// Fetches the PDF of a billing document; `None` if SAP returned no data.
    #[tracing::instrument(skip(self))]
    pub async fn invoice_pdf(&self, vbeln: &str) -> Result<Option<InvoiceDocument>, DomainError> {
        let response = self.call(&INVOICE_PDF, INVOICE_PDF.request(vbeln)).await?;
        Ok(response
            .field("X_PDF")
            .map(str::trim)
            .filter(|pdf| !pdf.is_empty())
            .map(|pdf| InvoiceDocument::new(vbeln, pdf)))
    }
}
