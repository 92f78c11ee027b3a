use serde::{Deserialize, Serialize};

/// One input line: the item identifier (ground truth) and the cluster it was assigned to.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Record {
    pub item: String,
    pub cluster: String,
}

impl Record {
    pub fn new(item: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            cluster: cluster.into(),
        }
    }
}

/// Integer labels for one column, one per record.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct LabelArray {
    pub labels: Vec<usize>,
    pub n_classes: usize,
}

impl LabelArray {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.labels
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    FirstAppearance = 1,
    Sorted = 2,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct MetricResult {
    pub homogeneity: f64,
    pub completeness: f64,
    pub v_measure: f64,
    /// Distinct predicted cluster identifiers.
    pub n_clusters: usize,
    /// Distinct ground-truth classes.
    pub n_classes: usize,
    pub n_samples: usize,
}
