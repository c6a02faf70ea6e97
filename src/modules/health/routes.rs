use axum::{routing::get, Router};

use crate::modules::health::controller;

pub fn routes() -> Router {
    Router::new().route("/", get(controller::root))
}
