//! Ibex format tests
//!
//! Tests for IR → Ibex data include export.

mod export;
mod properties;
