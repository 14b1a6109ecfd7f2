use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::{
    event::CreateBooking, Booking, CustomerBooking, CustomerBookingDetail,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Books a room, enforcing room existence and the conflict policy.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    /// All bookings in insertion order, each joined with its room.
    async fn find_all(&self) -> AppResult<Vec<CustomerBooking>>;
    /// Bookings placed by the given customer, joined with their rooms.
    /// Empty when the customer has none.
    async fn find_by_customer(&self, customer_name: &str)
        -> AppResult<Vec<CustomerBookingDetail>>;
}
