//! Dense tensor implementation and operations
//!
//! The `Tensor` type is defined in [`types`]; its operations are split by
//! responsibility into the sibling modules below.

// Core type definition and shape normalization
pub mod types;

// Operation modules
mod creation;
mod indexing;
mod layout;
mod manipulation;
mod shape_ops;

// Supporting modules
pub mod tensor_traits;

pub use types::Tensor;
