use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::customer::{show_customer_bookings, show_customer_list};

pub fn build_customer_routers() -> Router<AppRegistry> {
    let customer_routers = Router::new()
        .route("/", get(show_customer_list))
        .route("/:customer_name/bookings", get(show_customer_bookings));

    Router::new().nest("/customers", customer_routers)
}
