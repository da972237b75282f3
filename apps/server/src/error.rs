use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tickerdeck_core::errors::Error as CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Ticker not found".to_string()),
                CoreError::UnsupportedAssetClass(_) => (StatusCode::NOT_IMPLEMENTED, e.to_string()),
                CoreError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
                CoreError::ProviderUnavailable(reason) => {
                    tracing::error!("{}", reason);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Market data provider failed".to_string(),
                    )
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            error: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
