pub mod event;

use crate::model::id::RoomId;

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub seats_available: i32,
    pub amenities: String,
    pub price_per_hour: f64,
}

/// A room joined with the first booking that references it, if any.
/// Listings surface at most one booking per room even when several exist.
#[derive(Debug)]
pub struct RoomListing {
    pub room: Room,
    pub booking: Option<RoomBooking>,
}

impl RoomListing {
    /// A room counts as booked exactly when some booking references it.
    pub fn is_booked(&self) -> bool {
        self.booking.is_some()
    }
}

/// Booking fields surfaced on a room listing.
#[derive(Debug, Clone)]
pub struct RoomBooking {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}
