//! Value objects exchanged between services and the transport layer.

pub mod session;

pub use session::{LoginInput, Session};
