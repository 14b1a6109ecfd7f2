use kernel::model::{
    booking::Booking,
    id::{BookingId, RoomId},
    room::Room,
};
use serde::{Deserialize, Serialize};

use super::StoreState;

/// On-disk shape of the persisted state. Missing sections decode as empty
/// so a partially written file still loads.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

impl Snapshot {
    pub(crate) fn from_state(state: &StoreState) -> Self {
        let rooms = state
            .rooms
            .iter()
            .map(|room| {
                let is_booked = state.bookings.iter().any(|b| b.room_id == room.id);
                RoomRecord::from_room(room, is_booked)
            })
            .collect();
        let bookings = state.bookings.iter().map(BookingRecord::from).collect();
        Self { rooms, bookings }
    }
}

/// Room as stored on disk. `isBooked` stays on the wire so existing files
/// keep their shape; it is recomputed from the booking collection on save
/// and ignored on load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: RoomId,
    pub name: String,
    pub seats_available: i32,
    pub amenities: String,
    pub price_per_hour: f64,
    #[serde(default)]
    pub is_booked: bool,
}

impl RoomRecord {
    fn from_room(room: &Room, is_booked: bool) -> Self {
        let Room {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
        } = room.clone();
        Self {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
            is_booked,
        }
    }
}

impl From<RoomRecord> for Room {
    fn from(value: RoomRecord) -> Self {
        let RoomRecord {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
            is_booked: _,
        } = value;
        Self {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingId,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
}

impl From<&Booking> for BookingRecord {
    fn from(value: &Booking) -> Self {
        let Booking {
            id,
            customer_name,
            date,
            start_time,
            end_time,
            room_id,
        } = value.clone();
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

impl From<BookingRecord> for Booking {
    fn from(value: BookingRecord) -> Self {
        let BookingRecord {
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
