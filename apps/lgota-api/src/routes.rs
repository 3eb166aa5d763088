use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use lgota_service::{Error as ServiceError, SearchEnvelope, SearchRequest};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/smart-search/benefits", post(search_benefits))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_benefits(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchEnvelope>, ApiError> {
	let response = state.service.search(payload).await?;

	Ok(Json(response.into()))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	ok: bool,
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let message = err.to_string();

		match err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			ServiceError::UserContextNotFound { .. } =>
				Self::new(StatusCode::NOT_FOUND, "user_context_not_found", message),
			ServiceError::Storage { .. } => {
				tracing::error!(error = %message, "Storage failure while serving a search.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { ok: false, error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
