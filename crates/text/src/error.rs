use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
  /// The inclusive range `[start, end]` does not fit `0 <= start <= end < len`.
  #[error("invalid indices: [{start}, {end}] for a buffer of {len} chars")]
  InvalidRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TextError>;
