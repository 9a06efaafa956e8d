//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - An in-memory application driven through `tower::ServiceExt::oneshot`
//! - Account and token helpers

#![allow(dead_code)]

pub mod app;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
