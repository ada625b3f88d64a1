//! Employee portal: SOAP function modules routed through SAP PI/PO.

mod records;
mod service;

pub use records::{EmployeeLogin, EmployeeProfile, LeaveRecord, Payslip};
pub use service::EmployeeService;

use common::Padding;

use crate::record::RfcFunction;

pub const LOGIN: RfcFunction = RfcFunction {
    name: "Z48_EMPLOG_FM",
    service: "zsrv_emp_login_901548",
    id_param: "EMPLOYEE_ID",
    table: "",
    padding: Padding::None,
};

pub const PROFILE: RfcFunction = RfcFunction {
    name: "Z48_EMP_PROFILE_FM",
    service: "zsrv_emp_profile_901548",
    id_param: "IV_PERNR",
    table: "",
    padding: Padding::None,
};

pub const LEAVE: RfcFunction = RfcFunction {
    name: "Z48_EMP_LEAVE_FM",
    service: "zsrv_emp_leave_901548",
    id_param: "EMPLOYEE_ID",
    table: "LEAVE_DETAILS",
    padding: Padding::None,
};

pub const PAY: RfcFunction = RfcFunction {
    name: "Z48_EMP_PAY_FM",
    service: "zsrv_emp_pay_901548",
    id_param: "EMPLOYEE_ID",
    table: "PAYSLIP_DETAILS",
    padding: Padding::None,
};

pub const PAY_PDF: RfcFunction = RfcFunction {
    name: "Z48_EMP_PAYPDF_FM",
    service: "zsrv_emp_paypdf_901548",
    id_param: "EMPLOYEE_ID",
    table: "",
    padding: Padding::None,
};
