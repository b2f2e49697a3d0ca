/// Simulated AI analysis engine
///
/// There is no model. An analysis run waits a fixed delay to mimic
/// inference time, then draws one of the canned diagnosis records
/// uniformly at random. The stored scan is never inspected.

use std::time::Duration;

use crate::state::diagnosis::{random_diagnosis, Diagnosis};

/// How long the fake inference takes
pub const ANALYSIS_DELAY: Duration = Duration::from_secs(3);

/// Run the simulated analysis with the standard delay
pub async fn analyze() -> Diagnosis {
    analyze_after(ANALYSIS_DELAY).await
}

/// Run the simulated analysis with a caller-chosen delay
///
/// The delay is a parameter so tests can pass Duration::ZERO instead
/// of waiting out the full simulated inference time.
pub async fn analyze_after(delay: Duration) -> Diagnosis {
    tokio::time::sleep(delay).await;

    let diagnosis = random_diagnosis(&mut rand::thread_rng());
    println!(
        "🧠 Analysis complete: {} ({}% confidence)",
        diagnosis.condition, diagnosis.confidence
    );
    diagnosis
}
