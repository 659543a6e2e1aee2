mod buffer;
mod case;
mod config;
mod error;

pub use buffer::TextBuffer;
pub use case::{to_lower_case, to_lower_case_with, to_upper_case, to_upper_case_with};
pub use config::{BufferConfig, MARKER};
pub use error::{Result, TextError};
