/// Token appended by [`TextBuffer::insert_marker`](crate::TextBuffer::insert_marker).
pub const MARKER: &str = "*inserer*";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
  pub marker: String,
  /// Emit a `tracing` warning when a range operation is rejected.
  pub warn_on_invalid_range: bool,
}

impl Default for BufferConfig {
  fn default() -> Self {
    Self {
      marker: MARKER.to_string(),
      warn_on_invalid_range: true,
    }
  }
}
