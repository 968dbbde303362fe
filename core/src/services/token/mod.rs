//! Token module for bearer credential handling
//!
//! This module handles all token-related operations:
//! - Per-kind signing configuration
//! - HS256 minting and decoding
//! - Validation against expiry and the revocation store
//! - Background cleanup of expired revocation records

mod cleanup;
mod clock;
mod codec;
mod config;
mod validator;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, RevocationCleanupService};
#[cfg(any(test, feature = "mocks"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use codec::TokenCodec;
pub use config::{KindSettings, SigningContext};
pub use validator::{AccessVerifier, TokenValidator};
