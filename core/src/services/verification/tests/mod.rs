//! Tests for the verification engine and service

mod mocks;
mod service_tests;
