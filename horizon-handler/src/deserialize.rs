use serde_json::Value;
use tracing::{debug, info};

use horizon_core::{ContextTensor, HorizonError, Result, Tensor};

/// Field of the request object that carries the context window.
pub const INPUTS_FIELD: &str = "inputs";

/// Parse a JSON payload and convert its `inputs` into a bf16 context tensor.
///
/// Only JSON is understood; `content_type` is recorded but not inspected.
pub fn deserialize(payload: impl AsRef<[u8]>, content_type: &str) -> Result<ContextTensor> {
    info!("running deserializer");
    debug!(content_type, "request content type");

    let request: Value = serde_json::from_slice(payload.as_ref())
        .map_err(|e| HorizonError::Parse(format!("invalid JSON payload: {e}")))?;
    let inputs = request
        .get(INPUTS_FIELD)
        .ok_or_else(|| HorizonError::Parse(format!("payload has no `{INPUTS_FIELD}` field")))?;

    let context = ContextTensor::from_json(inputs)?;
    debug!(shape = ?context.shape(), "context tensor built");
    Ok(context)
}
