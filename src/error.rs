//! Invalid-input errors shared by every algorithm in the crate.
//!
//! Only malformed arguments are errors. An empty text, a pattern longer than
//! the text, a miss or an empty dictionary are all ordinary inputs with
//! well-defined answers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied prefix length is larger than the sequence it bounds.
    #[error("{name} length {value} exceeds sequence length {max}")]
    LengthOutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The memo table does not have one cell per pair of prefix lengths.
    #[error(
        "memo table is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}"
    )]
    MemoShape {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
    #[error("rolling hash modulus must be non-zero")]
    ZeroModulus,
    #[error("cannot rotate by {shift}: string has {len} chars")]
    RotationOutOfRange { shift: usize, len: usize },
}

/// Reject `value` when it exceeds `max`.
pub(crate) fn check_len(name: &'static str, value: usize, max: usize) -> Result<()> {
    if value > max {
        return Err(Error::LengthOutOfRange { name, value, max });
    }
    Ok(())
}
