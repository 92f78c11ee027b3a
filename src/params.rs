use serde::{Deserialize, Serialize};

use crate::types::Encoding;

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Params {
    /// Field separator between the item and cluster columns.
    pub delimiter: char,
    /// Weight of completeness relative to homogeneity in the V-measure.
    pub beta: f64,
    pub encoding: Encoding,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            delimiter: ',',
            beta: 1.0,
            encoding: Encoding::FirstAppearance,
        }
    }
}
