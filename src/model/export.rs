//! Recognition of persisted `export NAME=VALUE` lines
//!
//! The pattern mirrors what the patcher matches on: the trimmed line must
//! start with exactly `export ` followed by the name and `=`. Lines that use
//! other spacing or `declare -x` are left alone by both.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches `export NAME=VALUE` on a trimmed line.
    ///
    /// Captures:
    /// - Group 1: variable name (anything up to the first `=` or whitespace)
    /// - Group 2: raw value, quotes included
    pub static ref EXPORT_RE: Regex = Regex::new(r"^export ([^\s=]+)=(.*)$").unwrap();
}

/// A single recognized export line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    pub name: String,
    pub value: String,
    /// 1-based line number in the file
    pub line_number: usize,
}

impl ExportLine {
    /// Parse one line of a profile, returning `None` for anything that is not
    /// an export declaration.
    pub fn parse(line: &str, line_number: usize) -> Option<Self> {
        let caps = EXPORT_RE.captures(line.trim())?;
        Some(ExportLine {
            name: caps[1].to_string(),
            value: caps[2].to_string(),
            line_number,
        })
    }
}

/// All export declarations in file order
pub fn parse_exports(content: &str) -> Vec<ExportLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| ExportLine::parse(line, idx + 1))
        .collect()
}

/// Names of persisted variables, first occurrence order, without duplicates
pub fn persisted_names(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for export in parse_exports(content) {
        if !names.contains(&export.name) {
            names.push(export.name);
        }
    }
    names
}
