use std::collections::{BTreeSet, HashMap};

use crate::types::{Encoding, LabelArray};

/// Maps raw string labels to dense integers `0..k`.
///
/// Identical strings always receive the same integer and distinct strings
/// distinct integers. Each column is encoded on its own; two encodings never
/// share an integer space.
pub trait LabelEncoder {
    fn encode<S: AsRef<str>>(&self, raw: &[S]) -> LabelArray;
}

/// First distinct value seen gets 0, the next new one 1, and so on.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAppearance;

impl LabelEncoder for FirstAppearance {
    fn encode<S: AsRef<str>>(&self, raw: &[S]) -> LabelArray {
        let mut codes: HashMap<&str, usize> = HashMap::new();
        let labels = raw
            .iter()
            .map(|s| {
                let next = codes.len();
                *codes.entry(s.as_ref()).or_insert(next)
            })
            .collect();
        LabelArray {
            labels,
            n_classes: codes.len(),
        }
    }
}

/// Distinct values are numbered in lexicographic order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorted;

impl LabelEncoder for Sorted {
    fn encode<S: AsRef<str>>(&self, raw: &[S]) -> LabelArray {
        let distinct: BTreeSet<&str> = raw.iter().map(|s| s.as_ref()).collect();
        let codes: HashMap<&str, usize> = distinct
            .into_iter()
            .enumerate()
            .map(|(i, s)| (s, i))
            .collect();
        let labels = raw.iter().map(|s| codes[s.as_ref()]).collect();
        LabelArray {
            labels,
            n_classes: codes.len(),
        }
    }
}

impl LabelEncoder for Encoding {
    fn encode<S: AsRef<str>>(&self, raw: &[S]) -> LabelArray {
        match self {
            Encoding::FirstAppearance => FirstAppearance.encode(raw),
            Encoding::Sorted => Sorted.encode(raw),
        }
    }
}

/// Encodes the ground-truth and predicted columns independently, in parallel.
pub fn encode_columns<E, S>(encoder: &E, truth: &[S], pred: &[S]) -> (LabelArray, LabelArray)
where
    E: LabelEncoder + Sync,
    S: AsRef<str> + Sync,
{
    rayon::join(|| encoder.encode(truth), || encoder.encode(pred))
}
