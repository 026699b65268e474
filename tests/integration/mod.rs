//! Integration tests for the user store and the operation handler.

pub mod handler;
pub mod lifecycle;
pub mod listing;
