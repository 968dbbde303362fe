pub mod auth;
pub mod cors;

pub use auth::{bearer_token, AuthContext, BearerAuth};
pub use cors::create_cors;
