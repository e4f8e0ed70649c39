use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
/// Expansion error
pub enum ExpandError {
    /// Command token does not start with `I:` or `L:`.
    #[error("invalid command: {0:?} (expected I:<index> or L:<label>)")]
    InvalidCommand(String),

    /// Index mode with a non-numeric or non-positive index.
    #[error("invalid index: {0:?} (expected a 1-based positive integer)")]
    InvalidIndex(String),

    /// Label mode, label absent from the header line. Carries the raw
    /// header (terminators already stripped) for diagnostics.
    #[error("label not found in first line: {0:?}")]
    InvalidTargetLabel(String),

    /// Explicit output path resolves to the input path.
    #[error("output file is the same as the input file: {0}")]
    SameFilePath(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
