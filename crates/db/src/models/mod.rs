//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database table
//! - `Deserialize` DTOs for the corresponding request bodies

pub mod movie;
