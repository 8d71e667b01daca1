use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form payload. Fields default to empty strings so that missing
/// keys are reported through the validator rather than as a payload error.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactForm> for NewMessage {
    fn from(form: ContactForm) -> Self {
        NewMessage {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
