#[derive(Debug)]
pub struct CreateRoom {
    pub name: String,
    pub seats_available: i32,
    pub amenities: String,
    pub price_per_hour: f64,
}
