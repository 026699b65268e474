//! Builder utilities for operation handler types
//!
//! Builder implementations live in impl blocks on the core types.

pub mod request;
