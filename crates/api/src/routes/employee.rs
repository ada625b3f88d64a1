//! Employee portal endpoints (SOAP). All routes take the employee number in a JSON body.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use domain::{DomainError, EmployeeLogin, EmployeeProfile, EmployeeService};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::error::{ApiError, Family, UpstreamContext, json_body};

const EMPLOYEE_ID_REQUIRED: &str = "employeeId is required";

type Payload = Result<Json<EmployeeRequest>, JsonRejection>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub password: Option<String>,
}

impl EmployeeRequest {
    fn from_payload(payload: Payload) -> Result<Self, ApiError> {
        json_body(payload, Family::Employee, EMPLOYEE_ID_REQUIRED)
    }

    fn employee_id(&self) -> Result<&str, ApiError> {
        self.employee_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::bad_request(Family::Employee, EMPLOYEE_ID_REQUIRED))
    }
}

/// Accepts a JSON string or number; anything else reads as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// POST /api/employee-login
#[tracing::instrument(skip_all)]
pub async fn login(
    State(service): State<EmployeeService>,
    payload: Payload,
) -> Result<Json<EmployeeLogin>, ApiError> {
    let req = EmployeeRequest::from_payload(payload)?;
    let employee_id = req.employee_id()?;
    let password = req.password.as_deref().unwrap_or_default();
    match service.login(employee_id, password).await {
        Ok(login) => Ok(Json(login)),
        Err(DomainError::MissingField(message)) => Err(ApiError::Upstream {
            family: Family::Employee,
            source: DomainError::MissingField(message.clone()),
            message,
        }),
        Err(err) => Err(err).context(Family::Employee, "SAP RFC Login Call Failed"),
    }
}

/// POST /api/employee-profile
pub async fn profile(
    State(service): State<EmployeeService>,
    payload: Payload,
) -> Result<Json<EmployeeProfile>, ApiError> {
    let req = EmployeeRequest::from_payload(payload)?;
    let profile = service
        .profile(req.employee_id()?)
        .await
        .context(Family::Employee, "SAP RFC Profile Call Failed")?;
    Ok(Json(profile))
}

/// POST /api/employee-leave
pub async fn leave(
    State(service): State<EmployeeService>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let req = EmployeeRequest::from_payload(payload)?;
    let leaves = service
        .leave(req.employee_id()?)
        .await
        .context(Family::Employee, "SAP PI/PO Leave Call Failed")?;
    if leaves.is_empty() {
        return Err(ApiError::not_found(Family::Employee, "No leave details found"));
    }
    Ok(Json(json!({ "leaves": leaves })))
}

/// POST /api/employee-pay
pub async fn pay(
    State(service): State<EmployeeService>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let req = EmployeeRequest::from_payload(payload)?;
    let payslip = service
        .payslips(req.employee_id()?)
        .await
        .context(Family::Employee, "SAP PI/PO Payslip Call Failed")?;
    if payslip.is_empty() {
        return Err(ApiError::not_found(Family::Employee, "No payslip details found"));
    }
    Ok(Json(json!({ "payslip": payslip })))
}

/// POST /api/employee-paypdf
pub async fn pay_pdf(
    State(service): State<EmployeeService>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let req = EmployeeRequest::from_payload(payload)?;
    service
        .payslip_pdf(req.employee_id()?)
        .await
        .context(Family::Employee, "SAP PI/PO call failed")?
        .map(|base64| Json(json!({ "base64": base64 })))
        .ok_or_else(|| ApiError::not_found(Family::Employee, "No PDF found in response."))
}
