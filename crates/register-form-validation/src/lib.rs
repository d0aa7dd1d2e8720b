//! Register Form Validation Core
//!
//! Pure validation and coercion functions for raw form values, compatible with
//! both std and no_std environments. Used by the schema in `register-form` and,
//! through it, by the WASM bindings.
//!
//! Messages follow the wording of zod-style form validators so that server
//! and client output match.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod checkbox;
pub mod numeric;
pub mod string;

pub use checkbox::*;
pub use numeric::*;
pub use string::*;

/// Message for a required value that was not submitted
pub const REQUIRED_MESSAGE: &str = "Required";

/// Message for a value that does not match any accepted shape
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
