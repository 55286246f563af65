//! Property-based tests for record types.
