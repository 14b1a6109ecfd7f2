use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, RoomId},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /bookings`. Same zero-value presence rules as room
/// creation; a missing or zero `roomId` fails validation before any lookup
/// happens.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub customer_name: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub date: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub start_time: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub end_time: String,
    #[serde(default)]
    #[garde(range(min = 1))]
    pub room_id: u64,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            customer_name,
            date,
            start_time,
            end_time,
            room_id,
        } = value;
        CreateBooking {
            customer_name,
            date,
            start_time,
            end_time,
            room_id: RoomId::new(room_id),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: BookingResponse,
}

impl From<Booking> for BookingCreatedResponse {
    fn from(value: Booking) -> Self {
        Self {
            message: "Room booked successfully!".into(),
            booking: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            customer_name,
            date,
            start_time,
            end_time,
            room_id,
        } = value;
        Self {
            id,
            customer_name,
            date,
            start_time,
            end_time,
            room_id,
        }
    }
}
