use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use horizon_core::{ContextTensor, ForecastParams, Forecaster, HorizonError, Result, Tensor};

/// Sampled trajectories, indexed `[series][sample][step]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleForecast {
    pub samples: Vec<Vec<Vec<f32>>>,
}

impl SampleForecast {
    /// `[series, num_samples, prediction_length]`.
    pub fn shape(&self) -> [usize; 3] {
        let num_samples = self.samples.first().map_or(0, Vec::len);
        let prediction_length = self
            .samples
            .first()
            .and_then(|s| s.first())
            .map_or(0, Vec::len);
        [self.samples.len(), num_samples, prediction_length]
    }
}

/// Random walk from the last observation, with steps resampled from the
/// series' own first differences.
///
/// A rank-1 context is one series; a rank-2 context is a batch of series.
#[derive(Debug, Clone, Default)]
pub struct NaiveForecaster {
    seed: Option<u64>,
}

impl NaiveForecaster {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self, series: usize) -> Box<dyn RngCore> {
        match self.seed {
            // Offset by series index so rows in a batch draw independently.
            Some(s) => Box::new(rand::rngs::StdRng::seed_from_u64(s.wrapping_add(series as u64))),
            None => Box::new(rand::thread_rng()),
        }
    }
}

impl Forecaster for NaiveForecaster {
    type Output = SampleForecast;

    fn forecast(&self, context: &ContextTensor, params: &ForecastParams) -> Result<SampleForecast> {
        let rows = context.rows_f32().ok_or_else(|| {
            HorizonError::ModelInvocation(format!(
                "expected a context of rank 1 or 2, got rank {}",
                context.rank()
            ))
        })?;

        debug!(
            series = rows.len(),
            prediction_length = params.prediction_length,
            num_samples = params.num_samples,
            "naive forecast"
        );

        let samples = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut rng = self.rng(i);
                sample_series(row, params, &mut *rng)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SampleForecast { samples })
    }
}

fn sample_series(
    history: &[f32],
    params: &ForecastParams,
    rng: &mut dyn RngCore,
) -> Result<Vec<Vec<f32>>> {
    let last = *history
        .last()
        .ok_or_else(|| HorizonError::ModelInvocation("context series is empty".into()))?;

    let mut diffs: Vec<f32> = history.windows(2).map(|w| w[1] - w[0]).collect();
    if diffs.is_empty() {
        diffs.push(0.0);
    }

    let trajectories = (0..params.num_samples)
        .map(|_| {
            let mut level = last;
            (0..params.prediction_length)
                .map(|_| {
                    level += diffs[rng.gen_range(0..diffs.len())];
                    level
                })
                .collect()
        })
        .collect();
    Ok(trajectories)
}
