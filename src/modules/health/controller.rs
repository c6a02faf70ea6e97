use axum::Json;

use crate::modules::health::schema::MessageResponse;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Test works".to_string(),
    })
}
