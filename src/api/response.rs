//! Standard API response types

use serde::{Deserialize, Serialize};

/// Simple message response, returned by action endpoints
/// (`/database/optimize`, backup restore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
