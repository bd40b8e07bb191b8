use tracing::info;

use horizon_core::{ContextTensor, ForecastParams, Forecaster, Result};

/// Forecast `context` with the fixed policy (12 steps, 20 samples).
///
/// Errors from the model are returned as-is.
pub fn predict<M: Forecaster + ?Sized>(context: &ContextTensor, model: &M) -> Result<M::Output> {
    info!("running predictor");
    model.forecast(context, &ForecastParams::FIXED)
}
