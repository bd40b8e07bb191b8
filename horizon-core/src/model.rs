use crate::context::ContextTensor;
use crate::{ForecastParams, Result};

/// A pre-loaded forecasting model.
///
/// The adapter only ever borrows a forecaster; construction, weights and
/// device placement belong to whoever owns it.
pub trait Forecaster: Send + Sync {
    /// Whatever the model produces, typically sampled future trajectories.
    type Output;

    fn forecast(&self, context: &ContextTensor, params: &ForecastParams) -> Result<Self::Output>;
}

impl<F: Forecaster + ?Sized> Forecaster for &F {
    type Output = F::Output;

    fn forecast(&self, context: &ContextTensor, params: &ForecastParams) -> Result<Self::Output> {
        (**self).forecast(context, params)
    }
}

impl<F: Forecaster + ?Sized> Forecaster for std::sync::Arc<F> {
    type Output = F::Output;

    fn forecast(&self, context: &ContextTensor, params: &ForecastParams) -> Result<Self::Output> {
        (**self).forecast(context, params)
    }
}
