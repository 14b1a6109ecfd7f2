use crate::model::id::RoomId;

#[derive(Debug)]
pub struct CreateBooking {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
}
