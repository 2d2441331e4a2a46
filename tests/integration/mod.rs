//! Integration tests for the navigation-resolution engine

pub mod fixtures;
