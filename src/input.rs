//! CSV input parsing.
//!
//! The input file is comma-delimited with `|` as the quote character and no
//! header row. Column 2 picks the row shape: the literal `group` marks a
//! membership row, anything else an ipset definition row.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Raw 4-field record as it appears in the file.
#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    kind: String,
    value: String,
    netmask: String,
}

/// A typed input row.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Ipset definition: create `name` from `address` + `netmask`.
    IpSet {
        name: String,
        address: String,
        netmask: String,
    },
    /// Membership: add ipset `ipset` as a member of security group `group`.
    Membership { group: String, ipset: String },
}

/// A row plus the file line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedRow {
    pub line: u64,
    pub row: Row,
}

/// Lazy reader over the input file. Finite, forward-only; reopen the file to
/// restart.
pub struct RowReader {
    records: csv::StringRecordsIntoIter<File>,
}

impl RowReader {
    /// Open `path` for reading. Failure to open is fatal to the run.
    pub fn open(path: &Path) -> Result<RowReader> {
        let file = File::open(path)?;
        let reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .quote(b'|')
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        Ok(RowReader {
            records: reader.into_records(),
        })
    }
}

impl Iterator for RowReader {
    type Item = Result<NumberedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.records.next()? {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                if record.len() != 4 {
                    // Exactly 4 fields per record; fails this row only, not
                    // the run.
                    Err(Error::MalformedRow {
                        line,
                        reason: format!("expected 4 fields, got {}", record.len()),
                    })
                } else {
                    match record.deserialize::<RawRow>(None) {
                        Ok(raw) => Ok(NumberedRow {
                            line,
                            row: type_row(raw),
                        }),
                        Err(e) => Err(Error::MalformedRow {
                            line,
                            reason: e.to_string(),
                        }),
                    }
                }
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                Err(Error::MalformedRow {
                    line,
                    reason: e.to_string(),
                })
            }
        };
        Some(item)
    }
}

fn type_row(raw: RawRow) -> Row {
    if raw.kind == "group" {
        Row::Membership {
            group: raw.name,
            ipset: raw.value,
        }
    } else {
        Row::IpSet {
            name: raw.name,
            address: raw.value,
            netmask: raw.netmask,
        }
    }
}
