use crate::config::LineNumberPolicy;
use crate::error::{EngineError, Result};
use crate::source::strip_line_terminator;

/// Output schema taken from the header line, row-label column removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    names: Vec<String>,
}

impl HeaderSpec {
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of data columns every emitted row is reconciled to.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Read lines up to `policy.header_line()` and build the header from it.
///
/// Nothing past the header line is pulled from `lines`.
///
/// # Errors
/// - `HeaderMissing` when the source ends before the header line.
/// - `HeaderWithoutColumns` when the header line has no separator.
/// - Any error yielded by `lines` itself.
pub fn extract_header<I>(lines: I, policy: &LineNumberPolicy, separator: char) -> Result<HeaderSpec>
where
    I: IntoIterator<Item = Result<String>>,
{
    let target = policy.header_line();
    let mut found = 0;
    for line in lines.into_iter().take(target) {
        let line = line?;
        found += 1;
        if found == target {
            return parse_header_line(&line, target, separator);
        }
    }
    Err(EngineError::HeaderMissing {
        line: target,
        found,
    })
}

/// Split a single header line; `line_number` is only used for error reporting.
///
/// # Errors
/// Returns `HeaderWithoutColumns` when no field survives dropping the row label.
pub fn parse_header_line(line: &str, line_number: usize, separator: char) -> Result<HeaderSpec> {
    let (_label, rest) = strip_line_terminator(line)
        .split_once(separator)
        .ok_or(EngineError::HeaderWithoutColumns { line: line_number })?;
    let names = rest
        .split(separator)
        .map(|name| name.trim().to_string())
        .collect();
    Ok(HeaderSpec { names })
}
