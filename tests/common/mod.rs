//! Common test utilities for surfcast.
//!
//! This module provides shared utilities for testing the surfcast server.

#![allow(dead_code)]

pub mod http_client;
pub mod mock_source;
pub mod test_data;
