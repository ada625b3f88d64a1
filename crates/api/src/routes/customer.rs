//! Customer portal endpoints (SOAP).

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use domain::{
    AgingEntry, CreditDebitMemo, CustomerLogin, CustomerProfile, CustomerService, Delivery,
    Inquiry, Invoice, InvoiceDocument, MemoPeriod, OverallSales, SalesOrder,
};
use serde::Deserialize;

use crate::error::{ApiError, Family, UpstreamContext, json_body};
use crate::response::{CustomerReply, Data};

const CREDENTIALS_REQUIRED: &str = "Username and password are required";

type Reply<T> = Result<Json<CustomerReply<Data<Vec<T>>>>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemoQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/login
///
/// SAP failures are reported in the body with status 200, which the portal
/// login page relies on.
#[tracing::instrument(skip_all)]
pub async fn login(
    State(service): State<CustomerService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<CustomerLogin>, ApiError> {
    let req = json_body(payload, Family::Customer, CREDENTIALS_REQUIRED)?;
    let (Some(username), Some(password)) = (required(req.username), required(req.password))
    else {
        return Err(ApiError::bad_request(Family::Customer, CREDENTIALS_REQUIRED));
    };

    match service.login(&username, &password).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(err) => {
            tracing::error!(kind = err.kind().as_str(), error = %err, "customer login call failed");
            Ok(Json(CustomerLogin::connection_failed()))
        }
    }
}

/// GET /api/profile/{kunnr}
pub async fn profile(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Result<Json<CustomerReply<Data<CustomerProfile>>>, ApiError> {
    let profile = service
        .profile(&kunnr)
        .await
        .context(Family::Customer, "SAP connection failed")?;
    Ok(CustomerReply::data(profile))
}

/// GET /api/sales/{kunnr}
pub async fn sales(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<SalesOrder> {
    let rows = service
        .sales(&kunnr)
        .await
        .context(Family::Customer, "Failed to fetch sales data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/inquiry/{kunnr}
pub async fn inquiry(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<Inquiry> {
    let rows = service
        .inquiries(&kunnr)
        .await
        .context(Family::Customer, "Failed to fetch inquiry data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/delivery/{kunnr}
pub async fn delivery(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<Delivery> {
    let rows = service
        .deliveries(&kunnr)
        .await
        .context(Family::Customer, "SAP connection failed")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/aging/{kunnr}
pub async fn aging(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<AgingEntry> {
    let rows = service
        .aging(&kunnr)
        .await
        .context(Family::Customer, "Failed to fetch aging data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/invoices/{kunnr}
pub async fn invoices(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<Invoice> {
    let rows = service
        .invoices(&kunnr)
        .await
        .context(Family::Customer, "Failed to retrieve invoice data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/overallSales/{kunnr}
pub async fn overall_sales(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
) -> Reply<OverallSales> {
    let rows = service
        .overall_sales(&kunnr)
        .await
        .context(Family::Customer, "Failed to retrieve overall sales data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/cdmemo/{kunnr}?from=YYYYMMDD&to=YYYYMMDD
pub async fn memos(
    State(service): State<CustomerService>,
    Path(kunnr): Path<String>,
    Query(query): Query<MemoQuery>,
) -> Reply<CreditDebitMemo> {
    let period = MemoPeriod {
        from: query.from.unwrap_or_default(),
        to: query.to.unwrap_or_default(),
    };
    let rows = service
        .memos(&kunnr, &period)
        .await
        .context(Family::Customer, "Failed to fetch memo data")?;
    Ok(CustomerReply::data(rows))
}

/// GET /api/invoice-data/{vbeln}
pub async fn invoice_pdf(
    State(service): State<CustomerService>,
    Path(vbeln): Path<String>,
) -> Result<Json<CustomerReply<InvoiceDocument>>, ApiError> {
    service
        .invoice_pdf(&vbeln)
        .await
        .context(Family::Customer, "Failed to retrieve invoice PDF")?
        .map(CustomerReply::with)
        .ok_or_else(|| ApiError::not_found(Family::Customer, "No PDF data returned from SAP"))
}
