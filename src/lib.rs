//! Scores a clustering assignment file against the ground truth it encodes.
//!
//! Each input line is `item,cluster`. The item column is the ground truth,
//! the cluster column is the prediction. Both columns are encoded to integer
//! labels independently and compared with homogeneity, completeness and
//! V-measure.

use std::path::Path;

use tracing::debug;

pub mod encoder;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod params;
pub mod report;
pub mod types;

pub use encoder::{encode_columns, FirstAppearance, LabelEncoder, Sorted};
pub use error::{EvalError, Result};
pub use loader::{load_records, parse_records, split_columns};
pub use metrics::{evaluate_labels, homogeneity_completeness_v_measure};
pub use params::Params;
pub use report::{report_line, SEPARATOR};
pub use types::{Encoding, LabelArray, MetricResult, Record};

/// Loads a label file and scores it.
pub fn evaluate_file<P: AsRef<Path>>(path: P, params: &Params) -> Result<MetricResult> {
    let records = load_records(path, params)?;
    evaluate_records(&records, params)
}

pub fn evaluate_records(records: &[Record], params: &Params) -> Result<MetricResult> {
    let (items, clusters) = split_columns(records);
    let (truth, pred) = encode_columns(&params.encoding, &items, &clusters);
    debug!(
        samples = truth.len(),
        classes = truth.n_classes,
        clusters = pred.n_classes,
        "encoded label columns"
    );
    evaluate_labels(truth.as_slice(), pred.as_slice(), params.beta)
}
