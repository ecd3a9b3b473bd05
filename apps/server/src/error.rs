use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coinfolio_core::errors::{DatabaseError, Error as CoreError};
use coinfolio_market_data::Remediation;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0}")]
    BadPayload(#[from] JsonRejection),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::MarketData(e) => match e.remediation() {
            Remediation::FixAssetData => StatusCode::UNPROCESSABLE_ENTITY,
            Remediation::RetryFeed => StatusCode::BAD_GATEWAY,
        },
        CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
        CoreError::Database(DatabaseError::UniqueViolation(_))
        | CoreError::ConstraintViolation(_) => StatusCode::CONFLICT,
        CoreError::AccessDenied(_) => StatusCode::FORBIDDEN,
        CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::Database(_) | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Core(e) => {
                let status = core_status(&e);
                if status.is_server_error() {
                    tracing::error!(error = %e, "Request failed");
                }
                (status, e.to_string())
            }
            ApiError::Auth(e) => return e.into_response(),
            ApiError::BadPayload(e) => (e.status(), e.body_text()),
            ApiError::Anyhow(e) => {
                tracing::error!(error = %e, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
