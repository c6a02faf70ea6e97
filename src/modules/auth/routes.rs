use axum::{routing::post, Router};

use crate::modules::auth::controller;

pub fn routes() -> Router {
    Router::new().route("/auth/register", post(controller::register))
}
