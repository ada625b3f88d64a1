//! Vendor portal endpoints (OData).
//!
//! Goods and invoices answer 404 when SAP has no rows; the other lists answer
//! with an empty array.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use domain::{
    GoodsReceipt, PurchaseOrder, Rfq, VendorAging, VendorInvoice, VendorInvoicePdf, VendorMemo,
    VendorProfile, VendorService,
};
use serde::Deserialize;

use crate::error::{ApiError, Family, UpstreamContext, json_body};
use crate::response::VendorReply;

const CREDENTIALS_REQUIRED: &str = "Missing lifnr or password";

type Reply<T> = Result<Json<VendorReply<BTreeMap<&'static str, T>>>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub lifnr: Option<String>,
    pub password: Option<String>,
}

fn non_empty<T>(rows: Vec<T>, message: &str) -> Result<Vec<T>, ApiError> {
    if rows.is_empty() {
        Err(ApiError::not_found(Family::Vendor, message))
    } else {
        Ok(rows)
    }
}

/// POST /api/vendor-login
#[tracing::instrument(skip_all)]
pub async fn login(
    State(service): State<VendorService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Reply<String> {
    let req = json_body(payload, Family::Vendor, CREDENTIALS_REQUIRED)?;
    let lifnr = req.lifnr.filter(|v| !v.trim().is_empty());
    let password = req.password.filter(|v| !v.is_empty());
    let (Some(lifnr), Some(password)) = (lifnr, password) else {
        return Err(ApiError::bad_request(Family::Vendor, CREDENTIALS_REQUIRED));
    };

    match service
        .login(&lifnr, &password)
        .await
        .context(Family::Vendor, "SAP login failed")?
    {
        Some(confirmed) => Ok(VendorReply::entity("lifnr", confirmed)),
        None => Err(ApiError::unauthorized(Family::Vendor, "Invalid credentials")),
    }
}

/// GET /api/vendor-profile/{lifnr}
pub async fn profile(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<VendorProfile> {
    service
        .profile(&lifnr)
        .await
        .context(Family::Vendor, "Failed to retrieve vendor profile")?
        .map(|profile| VendorReply::entity("profile", profile))
        .ok_or_else(|| ApiError::not_found(Family::Vendor, "Profile not found"))
}

/// GET /api/goods/{lifnr}
pub async fn goods(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<GoodsReceipt>> {
    let rows = service
        .goods(&lifnr)
        .await
        .context(Family::Vendor, "Failed to retrieve goods data")?;
    let rows = non_empty(rows, "No goods data found for this vendor")?;
    Ok(VendorReply::entity("goods", rows))
}

/// GET /api/invoices/{lifnr}
pub async fn invoices(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<VendorInvoice>> {
    let rows = service
        .invoices(&lifnr)
        .await
        .context(Family::Vendor, "Failed to retrieve invoice data")?;
    let rows = non_empty(rows, "No invoice data found for this vendor")?;
    Ok(VendorReply::entity("invoices", rows))
}

/// GET /api/rfq/{lifnr}
pub async fn rfq(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<Rfq>> {
    let rows = service
        .rfqs(&lifnr)
        .await
        .context(Family::Vendor, "Failed to fetch RFQ data")?;
    Ok(VendorReply::entity("rfq", rows))
}

/// GET /api/purchase/{lifnr}
pub async fn purchase(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<PurchaseOrder>> {
    let rows = service
        .purchases(&lifnr)
        .await
        .context(Family::Vendor, "Failed to fetch purchase data")?;
    Ok(VendorReply::entity("purchase", rows))
}

/// GET /api/memo/{lifnr}
pub async fn memo(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<VendorMemo>> {
    let rows = service
        .memos(&lifnr)
        .await
        .context(Family::Vendor, "Failed to fetch memo data")?;
    Ok(VendorReply::entity("memo", rows))
}

/// GET /api/aging/{lifnr}
pub async fn aging(
    State(service): State<VendorService>,
    Path(lifnr): Path<String>,
) -> Reply<Vec<VendorAging>> {
    let rows = service
        .aging(&lifnr)
        .await
        .context(Family::Vendor, "Failed to fetch aging data")?;
    Ok(VendorReply::entity("aging", rows))
}

/// GET /api/invoice-pdf/{belnr}
pub async fn invoice_pdf(
    State(service): State<VendorService>,
    Path(belnr): Path<String>,
) -> Result<Json<VendorReply<VendorInvoicePdf>>, ApiError> {
    service
        .invoice_pdf(&belnr)
        .await
        .context(Family::Vendor, "Failed to fetch invoice PDF")?
        .map(VendorReply::with)
        .ok_or_else(|| ApiError::not_found(Family::Vendor, "PDF not found for this invoice"))
}
