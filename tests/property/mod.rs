//! Property-based tests for registry guarantees

mod registry_order;
