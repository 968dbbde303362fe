//! Request and response bodies of the HTTP API

pub mod auth;
pub mod professor;

pub use auth::{MessageResponse, RefreshRequest, TokenResponse};
pub use professor::{read_photo_form, SearchQuery, PHOTO_FIELD};
