//! Employee portal records.

use sap_client::XmlNode;
use serde::Serialize;

use crate::record::{FromSoapItem, text};

/// Successful `Z48_EMPLOG_FM` verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLogin {
    /// `VERIFICATION` exactly as SAP reported it.
    pub status: String,
    pub employee_id: String,
}

/// Export parameters of `Z48_EMP_PROFILE_FM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub full_name: String,
    pub gender: String,
    pub dob: String,
    pub org_unit: String,
    pub position: String,
    pub department: String,
    pub comp_code: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl FromSoapItem for EmployeeProfile {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            full_name: text(item, "EV_FULLNAME"),
            gender: text(item, "EV_GENDER"),
            dob: text(item, "EV_DOB"),
            org_unit: text(item, "EV_ORG_UNIT"),
            position: text(item, "EV_POSITION"),
            department: text(item, "EV_DEPARTMENT"),
            comp_code: text(item, "EV_COMP_CODE"),
            email: text(item, "EV_EMAIL"),
            phone: text(item, "EV_PHONE"),
            address: text(item, "EV_ADDRESS"),
        }
    }
}

/// Row of `LEAVE_DETAILS`: an absence with its quota.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
    pub absence_type: String,
    pub absence_days: String,
    pub reason: String,
    pub quota_number: String,
    pub quota_start: String,
    pub quota_end: String,
}

impl FromSoapItem for LeaveRecord {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            employee_id: text(item, "EMP_ID"),
            start_date: text(item, "START_DATE"),
            end_date: text(item, "END_DATE"),
            absence_type: text(item, "AB_TYPE"),
            absence_days: text(item, "AB_DAYS"),
            reason: text(item, "REASON"),
            quota_number: text(item, "QUOTA_NUMBER"),
            quota_start: text(item, "START_DATE_QUOTA"),
            quota_end: text(item, "END_DATE_QUOTA"),
        }
    }
}

/// Row of `PAYSLIP_DETAILS`: one wage type line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub employee_id: String,
    pub company_code: String,
    pub cost_center: String,
    pub position: String,
    pub name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub pay_scale_group: String,
    pub pay_scale_level: String,
    pub amount: String,
    pub wage_type: String,
    pub currency: String,
    pub working_hours: String,
}

impl FromSoapItem for Payslip {
    fn from_item(item: &XmlNode) -> Self {
        Self {
            employee_id: text(item, "EMP_ID"),
            company_code: text(item, "COMPANY_CODE"),
            cost_center: text(item, "COST_CENTER"),
            position: text(item, "STELL"),
            name: text(item, "NAME"),
            gender: text(item, "GENDER"),
            date_of_birth: text(item, "DOB"),
            nationality: text(item, "NATIONALITY"),
            pay_scale_group: text(item, "PS_GROUP"),
            pay_scale_level: text(item, "PS_LEVEL"),
            amount: text(item, "AMOUNT"),
            wage_type: text(item, "WAGE_TYPE"),
            currency: text(item, "CURRENCY_KEY"),
            working_hours: text(item, "WORKING_HOURS"),
        }
    }
}
