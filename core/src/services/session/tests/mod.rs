//! Tests for the session service
