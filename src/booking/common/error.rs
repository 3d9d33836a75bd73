use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel_async::pooled_connection::deadpool::PoolError;
use serde::Serialize;
use uuid::Uuid;

const NOT_FOUND_MESSAGE: &str = "the requested data was not found";
const PERSISTENCE_MESSAGE: &str = "the directory could not be updated";
const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    NotFound(Cow<'static, str>),
    #[error("{0}")]
    Validation(Cow<'static, str>),
    #[error("the directory could not be updated")]
    Persistence(#[source] diesel::result::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound(format!("there is no {} with id {} in our records", entity, id).into())
    }
}

impl From<diesel::result::Error> for BookingError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => Self::NotFound(NOT_FOUND_MESSAGE.into()),
            error => Self::Persistence(error),
        }
    }
}

impl From<PoolError> for BookingError {
    fn from(error: PoolError) -> Self {
        Self::Internal(error.into())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: Cow<'static, str>,
}

fn error_to_response(status: StatusCode, message: Cow<'static, str>) -> Response {
    (status, axum::Json(ErrorBody { error: message })).into_response()
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            BookingError::NotFound(message) => error_to_response(StatusCode::NOT_FOUND, message),
            BookingError::Validation(message) => {
                error_to_response(StatusCode::BAD_REQUEST, message)
            }
            BookingError::Persistence(source) => {
                tracing::error!("{:?}", source);
                error_to_response(StatusCode::INTERNAL_SERVER_ERROR, PERSISTENCE_MESSAGE.into())
            }
            BookingError::Internal(source) => {
                tracing::error!("{:?}", source);
                error_to_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        }
    }
}
