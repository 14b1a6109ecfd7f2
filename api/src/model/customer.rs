use kernel::model::{
    booking::{CustomerBooking, CustomerBookingDetail},
    id::BookingId,
};
use serde::Serialize;

/// Item of `GET /customers`: one entry per booking, so a customer with
/// several bookings appears several times.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingResponse {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<CustomerBooking> for CustomerBookingResponse {
    fn from(value: CustomerBooking) -> Self {
        let CustomerBooking {
            customer_name,
            room_name,
            date,
            start_time,
            end_time,
        } = value;
        Self {
            customer_name,
            room_name,
            date,
            start_time,
            end_time,
        }
    }
}

/// Item of `GET /customers/:customer_name/bookings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingDetailResponse {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: BookingId,
    pub booking_status: String,
}

impl From<CustomerBookingDetail> for CustomerBookingDetailResponse {
    fn from(value: CustomerBookingDetail) -> Self {
        let CustomerBookingDetail {
            booking_id,
            customer_name,
            room_name,
            date,
            start_time,
            end_time,
        } = value;
        Self {
            customer_name,
            room_name,
            date,
            start_time,
            end_time,
            booking_id,
            // Every stored booking is active; there is no cancellation flow.
            booking_status: "Booked".into(),
        }
    }
}
