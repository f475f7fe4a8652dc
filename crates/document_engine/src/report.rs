use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use readability_core::DocumentMetrics;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use thiserror::Error;

const REPORT_SUFFIX: &str = ".metrics.json";
const MAX_STEM_LEN: usize = 80;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Snapshot of one document's status written next to other reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub document: String,
    pub encoding: String,
    pub generated_utc: String,
    pub character_limit: Option<usize>,
    pub over_limit: bool,
    #[serde(flatten)]
    pub metrics: DocumentMetrics,
}

/// `{stem}--{short_hash(name)}.metrics.json`, with characters that are unsafe in
/// file names replaced. The hash covers the whole document name, so documents
/// sharing a stem in different directories or with different extensions get
/// distinct reports.
pub fn report_filename(document_name: &str) -> String {
    let base = Path::new(document_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(document_name);

    let mut stem = String::with_capacity(base.len());
    for c in base.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && stem.ends_with('_') {
            continue;
        }
        stem.push(c);
    }
    let mut stem = stem.trim_matches(&['_', ' ', '.'][..]).to_string();
    if stem.is_empty() {
        stem = "document".to_string();
    }
    if stem.len() > MAX_STEM_LEN {
        let mut end = MAX_STEM_LEN;
        while !stem.is_char_boundary(end) {
            end -= 1;
        }
        stem.truncate(end);
    }
    let hash = short_hash(document_name);
    format!("{stem}--{hash}{REPORT_SUFFIX}")
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

/// Creates `dir` if needed and checks that a file can be created inside it.
pub fn ensure_report_dir(dir: &Path) -> Result<(), ReportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ReportError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes `contents` to `{dir}/{filename}` through a synced temp file and a rename,
/// so readers never observe a partial report.
pub fn write_atomically(
    dir: &Path,
    filename: &str,
    contents: &[u8],
) -> Result<PathBuf, ReportError> {
    ensure_report_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| ReportError::Io(e.error))?;
    Ok(target)
}

pub fn write_report(dir: &Path, report: &MetricsReport) -> Result<PathBuf, ReportError> {
    let mut json = serde_json::to_vec_pretty(report)?;
    json.push(b'\n');
    write_atomically(dir, &report_filename(&report.document), &json)
}
