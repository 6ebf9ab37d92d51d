use crate::config::LineNumberPolicy;
use crate::error::Result;
use crate::header::HeaderSpec;
use crate::source::strip_line_terminator;
use std::iter::FusedIterator;

/// One output record; always exactly `HeaderSpec::count()` fields long.
pub type DataRow = Vec<String>;

/// Build the row iterator for one file.
///
/// `lines` must start at line 1 of the source: positions are counted here.
pub fn transform_rows<'a, I>(
    lines: I,
    policy: &'a LineNumberPolicy,
    header: &HeaderSpec,
    separator: char,
) -> DataRows<'a, I::IntoIter>
where
    I: IntoIterator<Item = Result<String>>,
{
    DataRows {
        lines: lines.into_iter(),
        policy,
        separator,
        columns: header.count(),
        line_number: 0,
        done: false,
    }
}

/// Single-pass iterator of reconciled data rows.
///
/// Metadata lines and lines without a separator are skipped silently. A read
/// error ends the iteration after being yielded.
pub struct DataRows<'a, I> {
    lines: I,
    policy: &'a LineNumberPolicy,
    separator: char,
    columns: usize,
    line_number: usize,
    done: bool,
}

impl<I> Iterator for DataRows<'_, I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<DataRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.line_number += 1;

            if self.policy.is_skipped(self.line_number) {
                continue;
            }
            if let Some(row) = split_data_line(&line, self.separator, self.columns) {
                return Some(Ok(row));
            }
        }
    }
}

impl<I> FusedIterator for DataRows<'_, I> where I: Iterator<Item = Result<String>> {}

/// Split one data line, drop its row label and reconcile to `columns`.
///
/// Returns `None` for lines that contain no separator at all.
#[must_use]
pub fn split_data_line(line: &str, separator: char, columns: usize) -> Option<DataRow> {
    let (_label, rest) = strip_line_terminator(line).split_once(separator)?;
    Some(reconcile(rest.split(separator), columns))
}

/// Pad with empty strings or truncate so the row has exactly `columns` fields.
pub fn reconcile<'s, F>(fields: F, columns: usize) -> DataRow
where
    F: IntoIterator<Item = &'s str>,
{
    let mut row = Vec::with_capacity(columns);
    row.extend(fields.into_iter().take(columns).map(str::to_owned));
    row.resize(columns, String::new());
    row
}
