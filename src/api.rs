use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use crate::{
    service::TransactionService,
    storage::{NewTransaction, Transaction, TransactionError, TransactionId},
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TransactionService>,
    pub default_page_size: i64,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(service: Arc<TransactionService>, default_page_size: i64) -> Self {
        Self {
            service,
            default_page_size,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/api/transactions/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Maps service failures onto HTTP responses.
pub struct ApiError(TransactionError);

impl From<TransactionError> for ApiError {
    fn from(e: TransactionError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TransactionError::NotFound(_) => StatusCode::NOT_FOUND,
            TransactionError::InvalidPagination { .. } | TransactionError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorBody {
            success: false,
            error: self.0.to_string(),
        })).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<i64>,
    size: Option<i64>,
}

async fn create_transaction(
    State(state): State<AppState>,
    Json(transaction): Json<NewTransaction>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(state.service.create(transaction)?))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<Transaction>, ApiError> {
    state.service.read(id)
        .map(Json)
        .ok_or(ApiError(TransactionError::NotFound(id)))
}

async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(state.default_page_size);
    Ok(Json(state.service.list(page, size)?))
}

async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(transaction): Json<NewTransaction>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(state.service.update(id, transaction)?))
}

async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id)?;
    Ok(StatusCode::OK)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "transactions": state.service.count(),
    }))
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
