//! Shared test utilities for roster integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated on-disk record stores in temp directories
//! - `EmployeeBuilder` for assembling forms without boilerplate

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::{date, TestHarness};
