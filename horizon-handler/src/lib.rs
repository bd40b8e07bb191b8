//! Request adapter between a hosting runtime and a pre-loaded forecaster.
//!
//! Three stages run in order for every request: [`deserialize()`] turns the
//! raw payload into a [`ContextTensor`](horizon_core::ContextTensor),
//! [`predict()`] hands it to the model with the fixed forecast policy, and
//! [`respond()`] passes the model output back untouched. [`Handler`] chains
//! them under an injected logging dispatch.

pub mod deserialize;
pub mod handler;
pub mod predict;
pub mod respond;

pub use deserialize::deserialize;
pub use handler::Handler;
pub use predict::predict;
pub use respond::respond;
