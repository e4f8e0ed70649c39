use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;

use crate::error::ExpandError;

use super::expand::{expand_at_index, expand_at_label, ExpandSummary};

/// A parsed target-column command.
///
/// The CLI takes the column as a single token, `I:<index>` (1-based) or
/// `L:<label>`. Parsing happens once, up front, through [`FromStr`]; the
/// rest of the run only ever sees the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Expand the column at this position. Zero-based; the 1-based CLI form
    /// is converted during parsing.
    ByIndex(usize),
    /// Expand the column whose header cell equals this label. The label is
    /// everything after the `L:` prefix, verbatim, and may be empty.
    ByLabel(String),
}

impl FromStr for Command {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(raw) = s.strip_prefix("I:") {
            let index: usize = raw
                .parse()
                .map_err(|_| ExpandError::InvalidIndex(raw.to_string()))?;
            if index < 1 {
                return Err(ExpandError::InvalidIndex(raw.to_string()));
            }
            Ok(Command::ByIndex(index - 1))
        } else if let Some(label) = s.strip_prefix("L:") {
            Ok(Command::ByLabel(label.to_string()))
        } else {
            Err(ExpandError::InvalidCommand(s.to_string()))
        }
    }
}

/// Runs one expansion from `input` to `out` according to `command`.
///
/// Index mode treats the whole input as data rows; label mode consumes the
/// first line as the header. Returns the tallies of the underlying run.
pub fn run<W: Write, R: BufRead>(
    out: &mut W,
    input: R,
    command: &Command,
) -> Result<ExpandSummary, ExpandError> {
    match command {
        Command::ByIndex(index) => expand_at_index(out, input, *index),
        Command::ByLabel(label) => expand_at_label(out, input, label),
    }
}

/// Emits the advisory warnings for a run that visibly did nothing.
///
/// Non-fatal; goes through the `log` facade, never to the primary output.
/// The caller skips this entirely under `--silent`.
pub fn report_advisories(summary: &ExpandSummary) {
    if summary.rows_with_target == 0 {
        warn!("found no values to be separated");
    } else if summary.rows_separated == 0 {
        warn!("none of the values were separated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_commands_become_zero_based() {
        assert_eq!("I:1".parse::<Command>().unwrap(), Command::ByIndex(0));
        assert_eq!("I:12".parse::<Command>().unwrap(), Command::ByIndex(11));
    }

    #[test]
    fn label_commands_keep_the_suffix_verbatim() {
        assert_eq!(
            "L:pop".parse::<Command>().unwrap(),
            Command::ByLabel("pop".to_string())
        );
        // labels may contain anything, including the command syntax itself
        assert_eq!(
            "L:I:2".parse::<Command>().unwrap(),
            Command::ByLabel("I:2".to_string())
        );
        assert_eq!("L:".parse::<Command>().unwrap(), Command::ByLabel(String::new()));
    }

    #[test]
    fn zero_and_garbage_indexes_are_rejected() {
        assert!(matches!(
            "I:0".parse::<Command>(),
            Err(ExpandError::InvalidIndex(raw)) if raw == "0"
        ));
        assert!(matches!(
            "I:x".parse::<Command>(),
            Err(ExpandError::InvalidIndex(_))
        ));
        assert!(matches!("I:".parse::<Command>(), Err(ExpandError::InvalidIndex(_))));
        assert!(matches!(
            "I:-1".parse::<Command>(),
            Err(ExpandError::InvalidIndex(_))
        ));
    }

    #[test]
    fn unknown_prefixes_are_invalid_commands() {
        for cmd in ["", "X:1", "i:1", "l:name", "I", "L"] {
            assert!(matches!(
                cmd.parse::<Command>(),
                Err(ExpandError::InvalidCommand(_))
            ));
        }
    }

    #[test]
    fn run_dispatches_on_the_variant() {
        let mut by_index = Vec::new();
        let summary =
            run(&mut by_index, "h\nx,y\n".as_bytes(), &Command::ByIndex(0)).unwrap();
        // index mode consumes no header, so the first line expands too
        assert_eq!(String::from_utf8(by_index).unwrap(), "h\nx\ny\n");
        assert_eq!(summary.rows_with_target, 2);

        let mut by_label = Vec::new();
        let summary = run(
            &mut by_label,
            "h\nx,y\n".as_bytes(),
            &Command::ByLabel("h".to_string()),
        )
        .unwrap();
        assert_eq!(String::from_utf8(by_label).unwrap(), "h\nx\ny\n");
        assert_eq!(summary.rows_separated, 1);
    }
}
