//! Employee service. Every call carries `SOAPAction: <rfc namespace>:<function>`.

use sap_client::{SoapClient, SoapRequest, SoapResponse};

use super::records::{EmployeeLogin, EmployeeProfile, LeaveRecord, Payslip};
use super::{LEAVE, LOGIN, PAY, PAY_PDF, PROFILE};
use crate::error::DomainError;
use crate::record::{FromSoapItem, RfcFunction, map_items};

/// Reads employee portal data through the employee SOAP services.
#[derive(Clone)]
pub struct EmployeeService {
    client: SoapClient,
}

impl EmployeeService {
    /// Creates a service calling SAP through `client`.
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    async fn call(
        &self,
        function: &RfcFunction,
        request: SoapRequest,
    ) -> Result<SoapResponse, DomainError> {
        let request = request.with_default_action();
        Ok(self.client.call(function.service, &request).await?)
    }

    /// Verifies credentials with `Z48_EMPLOG_FM`.
    ///
    /// Fails with [`DomainError::MissingField`] when SAP omits `VERIFICATION`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        employee_id: &str,
        password: &str,
    ) -> Result<EmployeeLogin, DomainError> {
        let request = LOGIN.request(employee_id).param("PASSWORD", password);
        let response = self.call(&LOGIN, request).await?;

        let status = response
            .field("VERIFICATION")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DomainError::MissingField("VERIFICATION field missing in response".to_string())
            })?;

        Ok(EmployeeLogin {
            status: status.to_string(),
            employee_id: employee_id.to_string(),
        })
    }

    /// Reads the employee's personal and organizational data.
    #[tracing::instrument(skip(self))]
    pub async fn profile(&self, employee_id: &str) -> Result<EmployeeProfile, DomainError> {
        let response = self.call(&PROFILE, PROFILE.request(employee_id)).await?;
        Ok(EmployeeProfile::from_item(response.element()))
    }

    /// Lists absences; empty when SAP returned no rows.
    #[tracing::instrument(skip(self))]
    pub async fn leave(&self, employee_id: &str) -> Result<Vec<LeaveRecord>, DomainError> {
        let response = self.call(&LEAVE, LEAVE.request(employee_id)).await?;
        Ok(map_items(&response.items(LEAVE.table)))
    }

    /// Lists payslip lines; empty when SAP returned no rows.
    #[tracing::instrument(skip(self))]
    pub async fn payslips(&self, employee_id: &str) -> Result<Vec<Payslip>, DomainError> {
        let response = self.call(&PAY, PAY.request(employee_id)).await?;
        Ok(map_items(&response.items(PAY.table)))
    }

    /// Fetches the base64 payslip PDF; `None` if SAP returned none.
    #[tracing::instrument(skip(self))]
    pub async fn payslip_pdf(&self, employee_id: &str) -> Result<Option<String>, DomainError> {
        let response = self.call(&PAY_PDF, PAY_PDF.request(employee_id)).await?;
        Ok(response
            .field("PAYSLIP_PDF")
            .map(str::trim)
            .filter(|pdf| !pdf.is_empty())
            .map(str::to_string))
    }
}
