use std::fmt;

use ropey::Rope;

use crate::case::{to_lower_case, to_upper_case};
use crate::config::BufferConfig;
use crate::error::{Result, TextError};

/// An in-memory, single-owner text buffer addressed by char index.
///
/// Ranges taken by [`to_upper`](Self::to_upper), [`to_lower`](Self::to_lower)
/// and [`erase`](Self::erase) are inclusive on both ends and must satisfy
/// `start <= end < len`. A rejected range leaves the content untouched.
///
/// There is no internal locking; wrap the buffer in a mutex to share it
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
  rope: Rope,
  config: BufferConfig,
}

impl TextBuffer {
  pub fn new() -> Self {
    Self::with_config(BufferConfig::default())
  }

  pub fn with_config(config: BufferConfig) -> Self {
    Self {
      rope: Rope::new(),
      config,
    }
  }

  pub fn config(&self) -> &BufferConfig {
    &self.config
  }

  pub fn text(&self) -> String {
    self.rope.to_string()
  }

  pub fn set_text(&mut self, text: &str) {
    self.rope = Rope::from_str(text);
  }

  pub fn append(&mut self, text: &str) {
    self.rope.insert(self.rope.len_chars(), text);
  }

  /// Number of chars in the buffer.
  pub fn len(&self) -> usize {
    self.rope.len_chars()
  }

  pub fn is_empty(&self) -> bool {
    self.rope.len_chars() == 0
  }

  /// Replaces the inclusive range `[start, end]` with `replacement`.
  ///
  /// The result is always `text[..start] + replacement + text[end + 1..]`.
  /// No validation happens here: `start` and `end + 1` are clamped to the
  /// buffer length, and when `end + 1 < start` the chars between them end up
  /// on both sides of `replacement`.
  pub fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
    let len = self.rope.len_chars();
    let head = start.min(len);
    let tail = end.saturating_add(1).min(len);

    if tail >= head {
      self.rope.remove(head..tail);
      self.rope.insert(head, replacement);
    } else {
      let mut inserted = String::with_capacity(replacement.len());
      inserted.push_str(replacement);
      inserted.extend(self.rope.slice(tail..head).chars());
      self.rope.insert(head, &inserted);
    }

    tracing::trace!(start, end, len = self.rope.len_chars(), "replaced range");
  }

  pub fn to_upper(&mut self, start: usize, end: usize) -> Result<()> {
    self.check_range(start, end)?;
    let upper = to_upper_case(self.rope.slice(start..end + 1).chars());
    self.replace_range(start, end, &upper);
    Ok(())
  }

  pub fn to_lower(&mut self, start: usize, end: usize) -> Result<()> {
    self.check_range(start, end)?;
    let lower = to_lower_case(self.rope.slice(start..end + 1).chars());
    self.replace_range(start, end, &lower);
    Ok(())
  }

  pub fn erase(&mut self, start: usize, end: usize) -> Result<()> {
    self.check_range(start, end)?;
    self.replace_range(start, end, "");
    Ok(())
  }

  pub fn clear(&mut self) {
    self.rope = Rope::new();
  }

  /// Appends the configured marker token, `*inserer*` by default.
  pub fn insert_marker(&mut self) {
    let len = self.rope.len_chars();
    self.rope.insert(len, &self.config.marker);
  }

  fn check_range(&self, start: usize, end: usize) -> Result<()> {
    let len = self.rope.len_chars();
    if start <= end && end < len {
      return Ok(());
    }

    if self.config.warn_on_invalid_range {
      tracing::warn!(start, end, len, "invalid indices");
    }
    Err(TextError::InvalidRange { start, end, len })
  }
}

impl fmt::Display for TextBuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.rope)
  }
}

impl From<&str> for TextBuffer {
  fn from(text: &str) -> Self {
    Self {
      rope: Rope::from_str(text),
      config: BufferConfig::default(),
    }
  }
}

impl From<String> for TextBuffer {
  fn from(text: String) -> Self {
    Self::from(text.as_str())
  }
}
