//! External metric naming.

use serde::{Deserialize, Serialize};

/// The external metric a trigger exposes to the autoscaler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSpec {
    /// Index-prefixed metric name, e.g. `s0-cassandra-sleep_centre`.
    pub metric_name: String,
    /// Target value per replica.
    pub target_average_value: u64,
}

/// Replace characters that are not allowed in metric names with `-`.
pub fn normalize_metric_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '.' | ':' | '%' => '-',
            c => c,
        })
        .collect()
}

/// Prefix a metric name with its trigger index (`s<index>-<name>`).
pub fn metric_name_with_index(scaler_index: usize, name: &str) -> String {
    format!("s{scaler_index}-{name}")
}
