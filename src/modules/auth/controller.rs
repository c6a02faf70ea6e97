use axum::Json;

use crate::modules::auth::schema::MessageResponse;

// Routing smoke check. Accepts any body and never reads it.
pub async fn register() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Register endpoint exists".to_string(),
    })
}
