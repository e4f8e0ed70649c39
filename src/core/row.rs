use std::io::{self, Write};

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between packed values inside a folded cell: a comma followed by
/// any run of whitespace. Whitespace *before* a comma belongs to the
/// preceding value and is preserved.
static VALUE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*").expect("valid separator pattern"));

/// Strips every trailing `\r` or `\n`, whatever the terminator style was.
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Splits a line into its cells. A line without tabs is a single cell.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}

/// Splits one cell into its packed values. Always yields at least one
/// element; a cell without commas comes back whole.
pub fn split_cell(cell: &str) -> Vec<&str> {
    VALUE_SEPARATOR.split(cell).collect()
}

/// Writes the cells tab-joined with a single `\n` terminator.
pub fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    out.write_all(fields.join("\t").as_bytes())?;
    out.write_all(b"\n")
}
