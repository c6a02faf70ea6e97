use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_title() -> String {
    "New Consultation".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatCreate {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatMessageBase {
    pub role: String, // "user" or "assistant"
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatResponse {
    pub id: String,
    pub user_id: i64,
    pub title: String,
    pub updated_at: String,
    // Chronological; entries are passed through uninterpreted.
    pub messages: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatMessageCreate {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttachmentSchema {
    #[serde(rename = "type")]
    pub attachment_type: String, // "image", "file" or "audio"
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String, // base64 payload
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub message: String,
    pub language: String,
    pub attachments: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GroundingSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub role: String,
    pub text: String,
    pub timestamp: String,
    #[serde(rename = "groundingSources")]
    pub grounding_sources: Option<Vec<GroundingSource>>,
}
