//! Authentication route handlers
//!
//! Login with email and password, refresh-token rotation and logout.

pub mod login;
pub mod logout;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
