//! Contract tests for the value_core component
//!
//! These tests verify the public API behavior the guard catalogue relies on.

mod realm_tests;
mod slot_tests;
