use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{EvalError, Result};
use crate::params::Params;
use crate::types::Record;

/// Reads the whole label file and parses it into records.
pub fn load_records<P: AsRef<Path>>(path: P, params: &Params) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EvalError::NotFound(path.to_path_buf()),
        _ => EvalError::Io(e),
    })?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let records = parse_records(&text, params)?;
    debug!(path = %path.display(), records = records.len(), "loaded label file");
    Ok(records)
}

/// Parses `item<delim>cluster` lines. Blank and whitespace-only lines are
/// skipped, a leading byte-order mark is dropped, there is no header.
pub fn parse_records(text: &str, params: &Params) -> Result<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        // lines() keeps a lone '\r' on a final line without '\n'
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(params.delimiter).collect();
        match fields.as_slice() {
            [item, cluster] => records.push(Record::new(*item, *cluster)),
            _ => {
                return Err(EvalError::Format {
                    line: i + 1,
                    fields: fields.len(),
                })
            }
        }
    }
    if records.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    Ok(records)
}

/// Splits records into the aligned ground-truth and predicted columns.
pub fn split_columns(records: &[Record]) -> (Vec<&str>, Vec<&str>) {
    records
        .iter()
        .map(|r| (r.item.as_str(), r.cluster.as_str()))
        .unzip()
}
