//! Utility modules

pub mod text;

// Re-export text utilities at the util level
pub use text::{char_class, char_slice, segment_at, tokenize, trimmed_span, CharClass, Segment};
