pub mod parser;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::storage::ChainedHashTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub inserted: usize,
    /// Lines with fewer than two fields, plus a skipped header.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Loader {
    pub delimiter: char,
    pub skip_header: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: false,
        }
    }
}

impl Loader {
    pub fn load_file(&self, path: &Path, table: &mut ChainedHashTable) -> Result<LoadSummary> {
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = self.load_reader(BufReader::new(file), table)?;
        info!(
            "Loaded {} courses from {} ({} lines skipped)",
            summary.inserted,
            path.display(),
            summary.skipped
        );
        Ok(summary)
    }

    /// Inserts one course per well-formed line. Bytes that are not UTF-8
    /// are replaced rather than rejected. A read error stops the load and
    /// leaves whatever was already inserted in the table.
    pub fn load_reader<R: BufRead>(
        &self,
        mut reader: R,
        table: &mut ChainedHashTable,
    ) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();
        let mut line_no: usize = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            line_no += 1;

            if line_no == 1 && self.skip_header {
                debug!("Skipping header line: {}", line);
                summary.skipped += 1;
                continue;
            }

            match parser::parse_line(&line, self.delimiter) {
                Some(course) => {
                    table.insert(course);
                    summary.inserted += 1;
                }
                None => {
                    debug!("Skipping line {}: fewer than two fields", line_no);
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }
}
