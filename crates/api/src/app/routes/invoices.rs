use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use ledgerview_analytics::{filter_invoices, InvoiceFilter};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListQuery>,
) -> axum::response::Response {
    let records = match services.records.snapshot().await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };

    let filter = InvoiceFilter {
        search: query.search,
        status: query.status,
    };
    let body: Vec<dto::InvoiceListEntry> = filter_invoices(&records, &filter)
        .into_iter()
        .map(dto::InvoiceListEntry::from)
        .collect();
    Json(body).into_response()
}
