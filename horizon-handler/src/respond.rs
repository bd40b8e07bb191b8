use tracing::{debug, info};

/// Return the prediction unchanged. Framing the response body is left to
/// the hosting runtime.
pub fn respond<T>(prediction: T, accept: &str) -> T {
    info!("running responder");
    debug!(accept, "response content type");
    prediction
}
