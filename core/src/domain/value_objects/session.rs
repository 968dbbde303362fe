//! Session value objects returned by login and refresh.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One access token and one refresh token minted together for a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subject: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn new(subject: impl Into<String>, access_token: String, refresh_token: String) -> Self {
        Self {
            subject: subject.into(),
            access_token,
            refresh_token,
        }
    }
}

/// Identity proof presented at login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub email: String,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}
