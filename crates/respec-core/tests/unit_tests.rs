//! Unit test suite for respec-core.
//!
//! Exercises the public API one concern at a time.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod unit;
