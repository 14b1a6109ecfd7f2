use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::health::{health_check, health_check_store};

pub fn build_health_check_routers() -> Router<AppRegistry> {
    let health_routers = Router::new()
        .route("/", get(health_check))
        .route("/store", get(health_check_store));

    Router::new().nest("/health", health_routers)
}
