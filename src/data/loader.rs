use super::models::{MatchRecord, REQUIRED_COLUMNS};
use crate::error::AppError;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

/// Load every match from a comma-separated file with a header row.
///
/// The whole file is read or nothing is: the first bad row aborts the load.
pub fn load_matches(path: &Path, progress: &ProgressBar) -> Result<Vec<MatchRecord>, AppError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::DatasetNotFound(path.display().to_string()),
        _ => AppError::Io(format!("{}: {}", path.display(), e)),
    })?;

    info!(path = %path.display(), "loading dataset");
    read_matches(file, progress)
}

pub fn read_matches<R: Read>(source: R, progress: &ProgressBar) -> Result<Vec<MatchRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_error)?.clone();
    debug!(columns = headers.len(), "read header row");

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|(source_name, english_name)| {
            !headers
                .iter()
                .any(|h| h == *source_name || h == *english_name)
        })
        .map(|(source_name, _)| source_name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingColumns(missing));
    }

    let mut matches = Vec::new();
    for result in reader.deserialize::<MatchRecord>() {
        matches.push(result.map_err(csv_error)?);
        progress.inc(1);
    }

    debug!(rows = matches.len(), "dataset loaded");
    Ok(matches)
}

fn csv_error(err: csv::Error) -> AppError {
    if err.is_io_error() {
        return AppError::Io(err.to_string());
    }

    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {} fields, found {}", expected_len, len)
        }
        csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    };

    AppError::MalformedRow { line, reason }
}
