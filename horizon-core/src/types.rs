use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    BF16,
}

impl DType {
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::BF16 => 2,
        }
    }
}

/// Forecast policy passed to a [`Forecaster`](crate::Forecaster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Number of future steps to forecast.
    pub prediction_length: usize,
    /// Number of sampled trajectories to draw.
    pub num_samples: usize,
}

impl ForecastParams {
    /// The deployment's fixed policy: 12 steps ahead, 20 trajectories.
    pub const FIXED: ForecastParams = ForecastParams {
        prediction_length: 12,
        num_samples: 20,
    };
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self::FIXED
    }
}
