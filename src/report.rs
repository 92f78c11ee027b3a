use std::fmt;

use crate::types::MetricResult;

/// Framing line printed after each report.
pub const SEPARATOR: &str =
    "# ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ #";

/// `GID: Homogeneity, Completeness, V-Measure, #clusters: XX.XX %, YY.YY %, ZZ.ZZ %, N`
pub fn report_line(result: &MetricResult) -> String {
    format!(
        "GID: Homogeneity, Completeness, V-Measure, #clusters: {:.2} %, {:.2} %, {:.2} %, {}",
        result.homogeneity * 100.0,
        result.completeness * 100.0,
        result.v_measure * 100.0,
        result.n_clusters
    )
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", report_line(self))?;
        write!(f, "{SEPARATOR}")
    }
}
