/*!
 # unfoldtt

 Expands "folded" rows of a tab-separated text table: a target column whose
 cell packs several comma-separated values is split so that each value gets
 its own output row, every other column copied verbatim.

 ## Core Concepts

 - **Folded column:** a column whose cells pack multiple logical values
   joined by commas (`b1,b2`).
 - **Command:** how the target column is selected: `I:<index>` (1-based
   position) or `L:<label>` (looked up in the first line).
 - **Separator pattern:** a comma followed by optional whitespace (`,\s*`).
   Whitespace before a comma is part of the value and survives expansion.
 - **Summary:** every run tallies how many rows had the target column and
   how many were actually split, feeding two advisory warnings.

 The transform is strictly line-at-a-time over a [`std::io::BufRead`] input
 and a [`std::io::Write`] sink; the binary in this crate is thin plumbing
 (argument parsing, stdin/stdout/file selection, in-place rewrite through a
 temporary file) over these functions.

 ## Getting Started

```rust
use unfoldtt::core::command::{run, Command};

fn main() -> Result<(), unfoldtt::ExpandError> {
    let table = "name\tcolors\n\
                 cherry\tred, black\n\
                 lime\tgreen\n";

    let command: Command = "L:colors".parse()?;

    let mut out = Vec::new();
    let summary = run(&mut out, table.as_bytes(), &command)?;

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "name\tcolors\n\
         cherry\tred\n\
         cherry\tblack\n\
         lime\tgreen\n"
    );
    assert_eq!(summary.rows_with_target, 2);
    assert_eq!(summary.rows_separated, 1);

    Ok(())
}
```

 Input line terminators (`\n`, `\r\n`, stray `\r`) are stripped on the way
 in; output rows always end with a single `\n`.
 */

/// Core module for the column expansion
pub mod core;

/// Error types for the expansion
pub mod error;

#[doc(inline)]
pub use error::*;
