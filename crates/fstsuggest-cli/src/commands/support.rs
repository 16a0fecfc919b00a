use std::io::Write;
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TermEntry {
    pub(super) term: String,
    pub(super) bucket: u8,
}

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn load_terms(path: &Path) -> Result<Vec<TermEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read term list {}", path.display()))?;
    parse_terms(&raw).with_context(|| format!("invalid term list {}", path.display()))
}

/// One `term<TAB>bucket` per line; the bucket defaults to 0, and blank lines
/// and `#` comments are skipped.
pub(super) fn parse_terms(raw: &str) -> Result<Vec<TermEntry>> {
    let mut entries = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let (term, bucket) = match line.rsplit_once('\t') {
            Some((term, bucket)) => {
                let bucket = bucket.trim().parse::<u8>().map_err(|err| {
                    anyhow::anyhow!("line {line_no}: invalid bucket '{bucket}': {err}")
                })?;
                (term, bucket)
            }
            None => (line, 0),
        };
        if term.is_empty() {
            anyhow::bail!("line {line_no}: empty term");
        }
        entries.push(TermEntry {
            term: term.to_string(),
            bucket,
        });
    }
    Ok(entries)
}
