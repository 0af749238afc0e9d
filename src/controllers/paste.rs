use std::time::Instant;

use tracing::{info, warn};

use crate::paste_id::PasteId;
use crate::types::{FetchFailure, FetchResult, Paste};
use crate::upstream::Upstream;

/// Fetch a paste and report how long the paste service took, whatever the outcome.
pub async fn fetch(upstream: &Upstream, id: &PasteId) -> FetchResult {
    let start = Instant::now();
    let outcome = upstream.get_paste(id).await;
    let time_taken_ms = round_ms(start.elapsed().as_secs_f64() * 1000.0);

    match outcome {
        Ok(data) => {
            info!("fetched paste: id='{id}', time={time_taken_ms}ms");
            FetchResult::Success(Paste::from_upstream(data, id.to_string(), time_taken_ms))
        }
        Err(e) => {
            warn!("failed to fetch paste: id='{id}', time={time_taken_ms}ms: {e}");
            FetchResult::Failure(FetchFailure {
                error: e.to_string(),
                paste_id: id.to_string(),
                time_taken_ms,
            })
        }
    }
}

/// Round to two decimal places.
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
