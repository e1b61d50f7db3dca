//! Arithmetic over expression trees
//!
//! - [`ops`]: checked application of a single binary operator
//! - [`eval`]: post-order evaluation of a finished tree
//! - [`errors`]: arithmetic error types
//!
//! The parser evaluates as it goes and uses [`ops::apply_binary`] for each
//! fold, so the fused value and [`eval::evaluate`] share one definition of
//! every operator.

pub mod errors;
pub mod eval;
pub mod ops;
