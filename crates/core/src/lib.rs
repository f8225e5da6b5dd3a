//! Marquee domain logic.
//!
//! Pure domain types shared by the database and API crates: the [`Runtime`]
//! minutes codec, the error-accumulating [`Validator`], and the [`Movie`]
//! entity with its validation rules. No I/O lives here.
//!
//! [`Runtime`]: runtime::Runtime
//! [`Validator`]: validator::Validator
//! [`Movie`]: movie::Movie

pub mod movie;
pub mod runtime;
pub mod validator;
