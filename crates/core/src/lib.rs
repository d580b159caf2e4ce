//! `perch-core` — shared building blocks for the quote engine.
//!
//! This crate contains **pure domain** primitives (no IO, no DOM, no clocks).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
