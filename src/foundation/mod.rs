//! Shared primitives: geometry and color types, the error taxonomy, and small numeric helpers.

pub mod core;
pub mod error;
pub(crate) mod math;
