use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    BookingConflict(String),
    #[error("{0}")]
    DataIntegrityError(String),
    #[error("snapshot file could not be read or written: {0}")]
    SnapshotIoError(#[from] std::io::Error),
    #[error("snapshot file could not be decoded: {0}")]
    SnapshotFormatError(#[from] serde_json::Error),
    #[error("store lock was poisoned by a panicked writer")]
    LockPoisonError,
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookingConflict(_) => StatusCode::CONFLICT,
            e @ (AppError::DataIntegrityError(_)
            | AppError::SnapshotIoError(_)
            | AppError::SnapshotFormatError(_)
            | AppError::LockPoisonError) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_maps_to_404() {
        let res = AppError::EntityNotFound("Room not found.".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn booking_conflict_maps_to_409() {
        let res =
            AppError::BookingConflict("Room is already booked for the selected time.".into())
                .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn lock_poison_maps_to_500() {
        let res = AppError::LockPoisonError.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
