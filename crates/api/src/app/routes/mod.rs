use axum::{
    routing::{get, post},
    Router,
};

pub mod chat;
pub mod dashboard;
pub mod invoices;
pub mod system;

/// Router for all dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/stats", get(dashboard::stats))
        .route("/invoice-trends", get(dashboard::invoice_trends))
        .route("/vendors/top10", get(dashboard::top_vendors))
        .route("/category-spend", get(dashboard::category_spend))
        .route("/cash-outflow", get(dashboard::cash_outflow))
        .route("/forecast", get(dashboard::forecast))
        .route("/invoices", get(invoices::list_invoices))
        .route("/chat-with-data", post(chat::chat_with_data))
        .route("/chat", post(chat::chat_with_data))
}
