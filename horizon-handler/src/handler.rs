//! Adapter entry point holding an explicit logging capability.

use tracing::dispatcher::{self, Dispatch};

use horizon_core::{ContextTensor, Forecaster, Result};

use crate::{deserialize, predict, respond};

/// Runs the adapter stages with a bound `tracing` dispatch.
///
/// Every call installs the dispatch as the thread-local default for its
/// duration, so stage logs go to the injected subscriber regardless of the
/// process-wide one. A handler holds no request data.
#[derive(Clone, Debug)]
pub struct Handler {
    dispatch: Dispatch,
}

impl Handler {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Capture whichever dispatcher is current on this thread.
    pub fn from_default() -> Self {
        Self::new(dispatcher::get_default(Dispatch::clone))
    }

    pub fn input(&self, payload: impl AsRef<[u8]>, content_type: &str) -> Result<ContextTensor> {
        dispatcher::with_default(&self.dispatch, || deserialize(payload, content_type))
    }

    pub fn predict<M: Forecaster + ?Sized>(
        &self,
        context: &ContextTensor,
        model: &M,
    ) -> Result<M::Output> {
        dispatcher::with_default(&self.dispatch, || predict(context, model))
    }

    pub fn output<T>(&self, prediction: T, accept: &str) -> T {
        dispatcher::with_default(&self.dispatch, || respond(prediction, accept))
    }

    /// Run deserialize, predict and respond for one request.
    ///
    /// Stops at the first failing stage; later stages are not run.
    pub fn invoke<M: Forecaster + ?Sized>(
        &self,
        payload: impl AsRef<[u8]>,
        content_type: &str,
        model: &M,
        accept: &str,
    ) -> Result<M::Output> {
        let context = self.input(payload, content_type)?;
        let prediction = self.predict(&context, model)?;
        Ok(self.output(prediction, accept))
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::from_default()
    }
}
