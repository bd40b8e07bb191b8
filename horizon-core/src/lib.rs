//! Horizon core types, traits, and error definitions.

pub mod context;
pub mod error;
pub mod model;
pub mod tensor;
pub mod types;

pub use context::ContextTensor;
pub use error::{HorizonError, Result};
pub use model::Forecaster;
pub use tensor::Tensor;
pub use types::*;
