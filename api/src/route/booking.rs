use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::booking::book_room;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new().route("/", post(book_room));

    Router::new().nest("/bookings", booking_routers)
}
