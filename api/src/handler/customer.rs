use axum::{
    extract::{Path, State},
    Json,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::customer::{CustomerBookingDetailResponse, CustomerBookingResponse};

pub async fn show_customer_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<CustomerBookingResponse>>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(|bookings| {
            bookings
                .into_iter()
                .map(CustomerBookingResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn show_customer_bookings(
    Path(customer_name): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<CustomerBookingDetailResponse>>> {
    let bookings = registry
        .booking_repository()
        .find_by_customer(&customer_name)
        .await?;

    if bookings.is_empty() {
        return Err(AppError::EntityNotFound(
            "No bookings found for this customer.".into(),
        ));
    }

    Ok(Json(
        bookings
            .into_iter()
            .map(CustomerBookingDetailResponse::from)
            .collect(),
    ))
}
