use std::io::{BufRead, Write};

use log::debug;

use crate::error::ExpandError;

use super::row::{split_cell, split_fields, trim_line_ending, write_row};

/// Tallies reported by one expansion run.
///
/// Both counts are advisory only; they never change what gets written. They
/// feed the warnings emitted by the dispatcher when a run visibly did
/// nothing (see [`crate::core::command::report_advisories`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExpandSummary {
    /// Rows in which the target column existed at all.
    pub rows_with_target: usize,
    /// Rows whose target cell actually split into two or more values.
    pub rows_separated: usize,
}

/// Expands the column at the zero-based `index`, streaming `input` to `out`
/// line by line.
///
/// Every line is stripped of its terminators, split on tabs, and written
/// back tab-joined with a single `\n`. When the target column exists, the
/// row is written once per packed value, the target cell replaced and every
/// other cell copied verbatim. Rows too short to have the target column
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use unfoldtt::core::expand::expand_at_index;
///
/// let mut out = Vec::new();
/// let summary = expand_at_index(&mut out, "a\tb1,b2\tc\n".as_bytes(), 1)?;
/// assert_eq!(out, b"a\tb1\tc\na\tb2\tc\n");
/// assert_eq!(summary.rows_separated, 1);
/// # Ok::<(), unfoldtt::ExpandError>(())
/// ```
pub fn expand_at_index<W: Write, R: BufRead>(
    out: &mut W,
    input: R,
    index: usize,
) -> Result<ExpandSummary, ExpandError> {
    debug!("Start expanding column {}", index);

    let mut summary = ExpandSummary::default();

    for line in input.lines() {
        let line = line?;
        // lines() leaves a lone \r behind on \r\r\n input
        let line = trim_line_ending(&line);
        let mut fields = split_fields(line);

        if index < fields.len() {
            let sub_values = split_cell(fields[index]);
            if sub_values.len() >= 2 {
                summary.rows_separated += 1;
            }
            for sub_value in sub_values {
                fields[index] = sub_value;
                write_row(out, &fields)?;
            }
            summary.rows_with_target += 1;
        } else {
            write_row(out, &fields)?;
        }
    }

    debug!(
        "End expanding: {} rows had the column, {} were separated",
        summary.rows_with_target, summary.rows_separated
    );

    Ok(summary)
}

/// Resolves `label` against the first input line, then expands the matching
/// column over the remaining lines.
///
/// The header is scanned left to right for the first cell exactly equal to
/// `label` (case-sensitive, no trimming). On a match the header is written
/// through unmodified and the rest of the input is delegated to
/// [`expand_at_index`]. An absent label fails with
/// [`ExpandError::InvalidTargetLabel`] before anything is written.
pub fn expand_at_label<W: Write, R: BufRead>(
    out: &mut W,
    mut input: R,
    label: &str,
) -> Result<ExpandSummary, ExpandError> {
    let mut header = String::new();
    input.read_line(&mut header)?;
    let header = trim_line_ending(&header);
    let labels = split_fields(header);

    let index = labels
        .iter()
        .position(|cell| *cell == label)
        .ok_or_else(|| ExpandError::InvalidTargetLabel(header.to_string()))?;

    debug!("Resolved label {:?} to column {}", label, index);

    write_row(out, &labels)?;

    expand_at_index(out, input, index)
}
