//! HTTP gateways exposing SAP data to the customer, vendor and employee portals.
//!
//! Each gateway is an independent router over one SAP endpoint, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod response;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use domain::{CustomerService, EmployeeService, VendorService};
use metrics_exporter_prometheus::PrometheusHandle;
use sap_client::{ODataClient, SapError, SoapClient};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{GatewayConfig, Portal};

/// Creates the customer portal router.
pub fn create_customer_app(service: CustomerService, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/api/login", post(routes::customer::login))
        .route("/api/profile/{kunnr}", get(routes::customer::profile))
        .route("/api/sales/{kunnr}", get(routes::customer::sales))
        .route("/api/inquiry/{kunnr}", get(routes::customer::inquiry))
        .route("/api/delivery/{kunnr}", get(routes::customer::delivery))
        .route("/api/aging/{kunnr}", get(routes::customer::aging))
        .route("/api/invoices/{kunnr}", get(routes::customer::invoices))
        .route("/api/overallSales/{kunnr}", get(routes::customer::overall_sales))
        .route("/api/cdmemo/{kunnr}", get(routes::customer::memos))
        .route("/api/invoice-data/{vbeln}", get(routes::customer::invoice_pdf))
        .with_state(service);

    finish(api, metrics_handle)
}

/// Creates the vendor portal router.
pub fn create_vendor_app(service: VendorService, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/api/vendor-login", post(routes::vendor::login))
        .route("/api/vendor-profile/{lifnr}", get(routes::vendor::profile))
        .route("/api/goods/{lifnr}", get(routes::vendor::goods))
        .route("/api/invoices/{lifnr}", get(routes::vendor::invoices))
        .route("/api/rfq/{lifnr}", get(routes::vendor::rfq))
        .route("/api/purchase/{lifnr}", get(routes::vendor::purchase))
        .route("/api/memo/{lifnr}", get(routes::vendor::memo))
        .route("/api/aging/{lifnr}", get(routes::vendor::aging))
        .route("/api/invoice-pdf/{belnr}", get(routes::vendor::invoice_pdf))
        .with_state(service);

    finish(api, metrics_handle)
}

/// Creates the employee portal router.
pub fn create_employee_app(service: EmployeeService, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/api/employee-login", post(routes::employee::login))
        .route("/api/employee-profile", post(routes::employee::profile))
        .route("/api/employee-leave", post(routes::employee::leave))
        .route("/api/employee-pay", post(routes::employee::pay))
        .route("/api/employee-paypdf", post(routes::employee::pay_pdf))
        .with_state(service);

    finish(api, metrics_handle)
}

/// Builds the router for one configured gateway, wiring its SAP client.
pub fn create_app(
    gateway: &GatewayConfig,
    metrics_handle: PrometheusHandle,
) -> Result<Router, SapError> {
    let sap = gateway.sap.clone();
    let app = match gateway.portal {
        Portal::Customer => {
            create_customer_app(CustomerService::new(SoapClient::new(sap)?), metrics_handle)
        }
        Portal::Vendor => {
            create_vendor_app(VendorService::new(ODataClient::new(sap)?), metrics_handle)
        }
        Portal::Employee => {
            create_employee_app(EmployeeService::new(SoapClient::new(sap)?), metrics_handle)
        }
    };
    Ok(app)
}

/// Adds the operational routes and the layers every gateway shares.
fn finish(api: Router, metrics_handle: PrometheusHandle) -> Router {
    api.merge(routes::ops::router(metrics_handle))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
