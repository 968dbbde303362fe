//! Tests for the professor service

#[cfg(test)]
mod service_tests;
