use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::welcome::welcome;

pub fn build_welcome_routers() -> Router<AppRegistry> {
    Router::new().route("/", get(welcome))
}
