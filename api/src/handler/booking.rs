use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::booking::{BookingCreatedResponse, CreateBookingRequest};

pub async fn book_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    req.validate(&())?;

    registry
        .booking_repository()
        .create(req.into())
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}
