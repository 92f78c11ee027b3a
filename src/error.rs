//! Error types for label file evaluation

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("label file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("line {line}: expected 2 fields, found {fields}")]
    Format { line: usize, fields: usize },

    #[error("label arrays differ in length: truth has {truth}, pred has {pred}")]
    ShapeMismatch { truth: usize, pred: usize },

    #[error("no records in label file")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
