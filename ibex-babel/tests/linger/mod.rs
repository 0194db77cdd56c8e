//! Linger format tests
//!
//! Tests for Linger → IR import.

mod import;
