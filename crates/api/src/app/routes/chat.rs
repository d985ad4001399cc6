use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn chat_with_data(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    match services.chat.answer(&body.question).await {
        Ok(answer) => Json(answer).into_response(),
        Err(e) => errors::chat_error_to_response(e),
    }
}
