//! Line-oriented input readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, Result};

/// Read all lines of `path`.
///
/// With `first_line_count` set, the first line is parsed as the number of
/// lines that follow and used to pre-reserve capacity; reading still
/// continues to end of file, so a wrong count only costs a reallocation.
pub fn read_lines(path: impl AsRef<Path>, first_line_count: bool) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut lines = BufReader::new(file).lines();
    let mut out = Vec::new();

    if first_line_count {
        match lines.next() {
            Some(header) => {
                let header = header.map_err(io_err)?;
                let count: usize = header
                    .trim()
                    .parse()
                    .map_err(|_| CliError::Header { value: header })?;
                out.reserve(count);
            }
            // An empty file is an empty grid, not an error.
            None => return Ok(out),
        }
    }

    for line in lines {
        out.push(line.map_err(io_err)?);
    }
    Ok(out)
}
