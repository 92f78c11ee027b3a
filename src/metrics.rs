//! External clustering metrics over integer label arrays.
//!
//! Entropies use natural logarithms. Labels may be any `usize` values; they
//! only need to be equal for members of the same class or cluster.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{EvalError, Result};
use crate::types::MetricResult;

/// Sparse contingency table: `(truth, pred)` pair counts plus both marginals.
#[derive(Debug, Default)]
pub struct Contingency {
    pub cells: HashMap<(usize, usize), usize>,
    pub truth_counts: HashMap<usize, usize>,
    pub pred_counts: HashMap<usize, usize>,
    pub n_samples: usize,
}

pub fn contingency(truth: &[usize], pred: &[usize]) -> Result<Contingency> {
    check_shape(truth, pred)?;
    let mut table = Contingency {
        n_samples: truth.len(),
        ..Contingency::default()
    };
    for (&t, &p) in truth.iter().zip(pred) {
        *table.cells.entry((t, p)).or_insert(0) += 1;
        *table.truth_counts.entry(t).or_insert(0) += 1;
        *table.pred_counts.entry(p).or_insert(0) += 1;
    }
    Ok(table)
}

fn check_shape(truth: &[usize], pred: &[usize]) -> Result<()> {
    if truth.len() != pred.len() {
        return Err(EvalError::ShapeMismatch {
            truth: truth.len(),
            pred: pred.len(),
        });
    }
    Ok(())
}

fn entropy_of_counts<'a>(counts: impl IntoIterator<Item = &'a usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    counts
        .into_iter()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum()
}

/// Shannon entropy of a label distribution. Zero for empty or single-class input.
pub fn entropy(labels: &[usize]) -> f64 {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &l in labels {
        *counts.entry(l).or_insert(0) += 1;
    }
    entropy_of_counts(counts.values(), labels.len())
}

fn mutual_information_of(table: &Contingency) -> f64 {
    if table.n_samples == 0 {
        return 0.0;
    }
    let n = table.n_samples as f64;
    let mi: f64 = table
        .cells
        .iter()
        .map(|(&(t, p), &nij)| {
            let nij = nij as f64;
            let a = table.truth_counts[&t] as f64;
            let b = table.pred_counts[&p] as f64;
            nij / n * (nij * n / (a * b)).ln()
        })
        .sum();
    // rounding can push a true zero slightly negative
    mi.max(0.0)
}

pub fn mutual_information(truth: &[usize], pred: &[usize]) -> Result<f64> {
    Ok(mutual_information_of(&contingency(truth, pred)?))
}

/// Returns `(homogeneity, completeness, v_measure)`.
///
/// Homogeneity is 1 when the ground truth has a single class, completeness is
/// 1 when the prediction has a single cluster. The V-measure is the weighted
/// harmonic mean `(1 + beta) * h * c / (beta * h + c)` and 0 when both scores
/// are 0.
pub fn homogeneity_completeness_v_measure(
    truth: &[usize],
    pred: &[usize],
    beta: f64,
) -> Result<(f64, f64, f64)> {
    if !beta.is_finite() || beta < 0.0 {
        return Err(EvalError::InvalidParameter(format!(
            "beta must be a finite non-negative number, got {beta}"
        )));
    }
    let table = contingency(truth, pred)?;
    Ok(scores_of(&table, beta))
}

fn scores_of(table: &Contingency, beta: f64) -> (f64, f64, f64) {
    let h_truth = entropy_of_counts(table.truth_counts.values(), table.n_samples);
    let h_pred = entropy_of_counts(table.pred_counts.values(), table.n_samples);
    let mi = mutual_information_of(table);
    trace!(h_truth, h_pred, mi, "entropies");

    let homogeneity = if h_truth == 0.0 { 1.0 } else { mi / h_truth };
    let completeness = if h_pred == 0.0 { 1.0 } else { mi / h_pred };
    let denom = beta * homogeneity + completeness;
    let v_measure = if homogeneity + completeness == 0.0 || denom == 0.0 {
        0.0
    } else {
        (1.0 + beta) * homogeneity * completeness / denom
    };
    (homogeneity, completeness, v_measure)
}

/// Number of distinct values in a label array.
pub fn distinct_count(labels: &[usize]) -> usize {
    labels.iter().collect::<HashSet<_>>().len()
}

/// Computes the three scores together with the class and cluster counts.
pub fn evaluate_labels(truth: &[usize], pred: &[usize], beta: f64) -> Result<MetricResult> {
    let (homogeneity, completeness, v_measure) =
        homogeneity_completeness_v_measure(truth, pred, beta)?;
    Ok(MetricResult {
        homogeneity,
        completeness,
        v_measure,
        n_clusters: distinct_count(pred),
        n_classes: distinct_count(truth),
        n_samples: truth.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn hcv(truth: &[usize], pred: &[usize]) -> (f64, f64, f64) {
        homogeneity_completeness_v_measure(truth, pred, 1.0).unwrap()
    }

    #[test]
    fn entropy_values() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[3, 3, 3]), 0.0);
        assert!((entropy(&[0, 1]) - 2f64.ln()).abs() < EPS);
        assert!((entropy(&[0, 1, 2, 3]) - 4f64.ln()).abs() < EPS);
    }

    #[test]
    fn perfect_match() {
        let (h, c, v) = hcv(&[0, 0, 1, 1], &[1, 1, 0, 0]);
        assert!((h - 1.0).abs() < EPS);
        assert!((c - 1.0).abs() < EPS);
        assert!((v - 1.0).abs() < EPS);
    }

    #[test]
    fn merged_clusters() {
        let (h, c, v) = hcv(&[0, 1, 2, 3], &[0, 0, 1, 1]);
        assert!((h - 0.5).abs() < EPS);
        assert!((c - 1.0).abs() < EPS);
        assert!((v - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn split_classes() {
        // each class split across two clusters
        let (h, c, v) = hcv(&[0, 0, 1, 1], &[0, 1, 2, 3]);
        assert!((h - 1.0).abs() < EPS);
        assert!((c - 0.5).abs() < EPS);
        assert!((v - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn independent_labels() {
        let (h, c, v) = hcv(&[0, 0, 1, 1], &[0, 1, 0, 1]);
        assert!(h.abs() < EPS);
        assert!(c.abs() < EPS);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn known_reference_values() {
        // truth [0,0,0,1,1,1], pred [0,0,1,1,2,2]
        // MI = (2/3)ln2, H(truth) = ln2, H(pred) = ln3
        let (h, c, v) = hcv(&[0, 0, 0, 1, 1, 1], &[0, 0, 1, 1, 2, 2]);
        let mi = 2.0 / 3.0 * 2f64.ln();
        let eh = mi / 2f64.ln();
        let ec = mi / 3f64.ln();
        assert!((h - eh).abs() < EPS);
        assert!((c - ec).abs() < EPS);
        assert!((v - 2.0 * eh * ec / (eh + ec)).abs() < EPS);
        assert!((h - 0.6666666666666666).abs() < 1e-9);
        assert!((c - 0.420619835714305).abs() < 1e-9);
    }

    #[test]
    fn beta_weights_completeness() {
        let truth = [0, 0, 0, 1, 1, 1];
        let pred = [0, 0, 1, 1, 2, 2];
        let (h, c, _) = hcv(&truth, &pred);
        let (_, _, v2) = homogeneity_completeness_v_measure(&truth, &pred, 2.0).unwrap();
        assert!((v2 - 3.0 * h * c / (2.0 * h + c)).abs() < EPS);
        let (_, _, v0) = homogeneity_completeness_v_measure(&truth, &pred, 0.0).unwrap();
        assert!((v0 - h).abs() < EPS);
    }

    #[test]
    fn invalid_beta() {
        let err = homogeneity_completeness_v_measure(&[0], &[0], -1.0).unwrap_err();
        assert!(matches!(err, EvalError::InvalidParameter(_)));
        let err = homogeneity_completeness_v_measure(&[0], &[0], f64::NAN).unwrap_err();
        assert!(matches!(err, EvalError::InvalidParameter(_)));
    }

    #[test]
    fn empty_labels_score_one() {
        assert_eq!(hcv(&[], &[]), (1.0, 1.0, 1.0));
    }

    #[test]
    fn shape_mismatch() {
        let err = homogeneity_completeness_v_measure(&[0, 1, 2], &[0, 1], 1.0).unwrap_err();
        match err {
            EvalError::ShapeMismatch { truth, pred } => {
                assert_eq!(truth, 3);
                assert_eq!(pred, 2);
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
        assert!(mutual_information(&[0], &[]).is_err());
    }

    #[test]
    fn contingency_counts() {
        let table = contingency(&[0, 0, 1], &[5, 5, 5]).unwrap();
        assert_eq!(table.cells[&(0, 5)], 2);
        assert_eq!(table.cells[&(1, 5)], 1);
        assert_eq!(table.pred_counts[&5], 3);
        assert_eq!(table.n_samples, 3);
    }

    #[test]
    fn evaluate_counts_distinct_labels() {
        let result = evaluate_labels(&[0, 1, 2, 3], &[7, 7, 9, 9], 1.0).unwrap();
        assert_eq!(result.n_clusters, 2);
        assert_eq!(result.n_classes, 4);
        assert_eq!(result.n_samples, 4);
    }
}
