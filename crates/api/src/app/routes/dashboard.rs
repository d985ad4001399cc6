use std::sync::Arc;

use axum::{extract::Extension, Json, response::IntoResponse};
use chrono::Utc;
use rand::thread_rng;

use ledgerview_analytics as analytics;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    Json(dto::StatsResponse::from(analytics::dashboard_stats(&records))).into_response()
}

pub async fn invoice_trends(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    let trend = analytics::monthly_trend(&records);
    let body: Vec<dto::TrendPoint> = trend.iter().map(dto::TrendPoint::from).collect();
    Json(body).into_response()
}

pub async fn top_vendors(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    let body: Vec<dto::VendorSpendEntry> = analytics::top_vendors(&records, 10)
        .into_iter()
        .map(dto::VendorSpendEntry::from)
        .collect();
    Json(body).into_response()
}

pub async fn category_spend(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    let body: Vec<dto::CategorySpendEntry> = analytics::category_spend(&records)
        .into_iter()
        .map(dto::CategorySpendEntry::from)
        .collect();
    Json(body).into_response()
}

pub async fn cash_outflow(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    let today = Utc::now().date_naive();
    let outflow = analytics::cash_outflow(&records, today);
    let body: Vec<dto::OutflowEntry> = outflow.iter().map(dto::OutflowEntry::from).collect();
    Json(body).into_response()
}

pub async fn forecast(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };
    let trend = analytics::monthly_trend(&records);
    let projection = analytics::project(&trend, &mut thread_rng());
    let body: Vec<dto::ForecastEntry> = projection.iter().map(dto::ForecastEntry::from).collect();
    Json(body).into_response()
}
