use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, Room, RoomListing},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /rooms`. Missing fields deserialize to their zero values
/// and then fail validation, so absent, empty and zero inputs are rejected
/// alike.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[garde(range(min = 1))]
    pub seats_available: i32,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub amenities: String,
    #[serde(default)]
    #[garde(custom(positive_price))]
    pub price_per_hour: f64,
}

fn positive_price(value: &f64, _context: &()) -> garde::Result {
    if *value > 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new("must be greater than zero"))
    }
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            name,
            seats_available,
            amenities,
            price_per_hour,
        } = value;
        CreateRoom {
            name,
            seats_available,
            amenities,
            price_per_hour,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedResponse {
    pub message: String,
    pub room: RoomResponse,
}

impl From<Room> for RoomCreatedResponse {
    fn from(value: Room) -> Self {
        Self {
            message: "Room created successfully!".into(),
            room: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub seats_available: i32,
    pub amenities: String,
    pub price_per_hour: f64,
    pub is_booked: bool,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
        } = value;
        Self {
            id,
            name,
            seats_available,
            amenities,
            price_per_hour,
            // A room fresh out of the store has no bookings yet.
            is_booked: false,
        }
    }
}

/// Item of `GET /rooms`: the room plus, when booked, the first booking that
/// references it. The booking columns are null for free rooms.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListingResponse {
    pub id: RoomId,
    pub name: String,
    pub seats_available: i32,
    pub amenities: String,
    pub price_per_hour: f64,
    pub is_booked: bool,
    pub customer_name: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl From<RoomListing> for RoomListingResponse {
    fn from(value: RoomListing) -> Self {
        let is_booked = value.is_booked();
        let RoomListing { room, booking } = value;
        let (customer_name, date, start_time, end_time) = match booking {
            Some(b) => (
                Some(b.customer_name),
                Some(b.date),
                Some(b.start_time),
                Some(b.end_time),
            ),
            None => (None, None, None, None),
        };
        Self {
            id: room.id,
            name: room.name,
            seats_available: room.seats_available,
            amenities: room.amenities,
            price_per_hour: room.price_per_hour,
            is_booked,
            customer_name,
            date,
            start_time,
            end_time,
        }
    }
}
