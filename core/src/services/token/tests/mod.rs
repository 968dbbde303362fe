//! Tests for the token module

#[cfg(test)]
mod cleanup_tests;
#[cfg(test)]
mod validator_tests;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use super::{Clock, KindSettings, ManualClock, SigningContext, TokenCodec};

pub(crate) const ACCESS_SECRET: &str = "access-secret-for-tests";
pub(crate) const REFRESH_SECRET: &str = "refresh-secret-for-tests";

pub(crate) fn test_context(access_ttl: Duration, refresh_ttl: Duration) -> SigningContext {
    SigningContext::new(
        KindSettings::new(ACCESS_SECRET, access_ttl),
        KindSettings::new(REFRESH_SECRET, refresh_ttl),
    )
    .unwrap()
}

pub(crate) fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()))
}

pub(crate) fn test_codec(clock: Arc<ManualClock>) -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(
        test_context(Duration::seconds(60), Duration::hours(24)),
        clock as Arc<dyn Clock>,
    ))
}
