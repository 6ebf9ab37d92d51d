use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::output_path_for;
use crate::header::{HeaderSpec, extract_header};
use crate::rows::transform_rows;
use crate::source::open_lines;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of a successful single-file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: PathBuf,
    pub columns: usize,
    pub rows: usize,
}

/// Convert one input file into its sibling `.csv`.
///
/// The source is opened twice: once for the header prefix and once for the
/// full row pass. Each handle is closed before the next step starts.
///
/// # Errors
/// Header errors leave no output behind. Any error after the output file has
/// been created removes that file before returning.
pub fn process_file(input: &Path, config: &Config) -> Result<Conversion> {
    let header = {
        let lines = open_lines(input, config.encoding)?;
        extract_header(lines, &config.policy, config.separator)?
    };
    debug!("{}: {} columns", input.display(), header.count());

    let output = output_path_for(input);
    let file = File::create(&output).map_err(|source| EngineError::FileWrite {
        path: output.clone(),
        source,
    })?;

    match write_csv(file, input, &output, &header, config) {
        Ok(rows) => Ok(Conversion {
            output,
            columns: header.count(),
            rows,
        }),
        Err(err) => {
            remove_partial_output(&output);
            Err(err)
        }
    }
}

/// Write the header record and every data row; returns the data row count.
/// `file` is dropped (closed) on every return path.
fn write_csv(
    file: File,
    input: &Path,
    output: &Path,
    header: &HeaderSpec,
    config: &Config,
) -> Result<usize> {
    let csv_err = |source: csv::Error| EngineError::Csv {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(config.line_ending.terminator())
        .from_writer(file);

    writer.write_record(header.names()).map_err(csv_err)?;

    let lines = open_lines(input, config.encoding)?;
    let mut rows = 0;
    for row in transform_rows(lines, &config.policy, header, config.separator) {
        writer.write_record(&row?).map_err(csv_err)?;
        rows += 1;
    }

    let file = writer.into_inner().map_err(|e| EngineError::FileWrite {
        path: output.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|source| EngineError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(rows)
}

fn remove_partial_output(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("removed partial output {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("could not remove partial output {}: {e}", path.display()),
    }
}
