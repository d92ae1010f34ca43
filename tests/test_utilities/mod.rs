//! Shared helpers for integration and end-to-end tests.
//!
//! Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod mock_server;
pub mod mocks;
