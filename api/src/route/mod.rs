pub mod booking;
pub mod customer;
pub mod health;
pub mod room;
pub mod welcome;

use axum::Router;
use registry::AppRegistry;

/// The full application router. The binary adds tracing layers and state.
pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(welcome::build_welcome_routers())
        .merge(health::build_health_check_routers())
        .merge(room::build_room_routers())
        .merge(booking::build_booking_routers())
        .merge(customer::build_customer_routers())
}
