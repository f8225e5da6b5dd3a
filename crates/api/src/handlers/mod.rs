//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers decode via [`StrictJson`], validate with the core
//! [`Validator`], delegate to the corresponding repository in
//! `marquee_db`, and map errors via [`AppError`].
//!
//! [`StrictJson`]: crate::extract::StrictJson
//! [`Validator`]: marquee_core::validator::Validator
//! [`AppError`]: crate::error::AppError

pub mod movies;
