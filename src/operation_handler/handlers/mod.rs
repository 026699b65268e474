//! Operation handler modules
//!
//! - CRUD operations (create, get, replace, patch, delete)
//! - Query operations (list)
//! - Schema operations (schemas, resource types)

pub mod crud;
pub mod query;
pub mod schema;
