use serde::{Deserialize, Serialize};

/// Message posted by the contact form as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Backend acknowledgement for a contact message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub ok: bool,
}
