//! Building blocks for Learning Vector Quantization models: the activation functions
//! applied to their scores and the solvers that fit their parameters.

pub mod activations;
pub mod builder;
pub mod error;
pub mod solvers;
pub mod specs;

pub use error::{LvqErr, Result};
