//! Text tokenization and character-offset helpers
//!
//! All offsets in this crate are character (Unicode scalar value) indices,
//! never byte indices. End offsets are exclusive.

use serde::{Deserialize, Serialize};

/// Character class used to split text into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Unicode letters
    Letter,
    /// Unicode digits and other numeric characters
    Digit,
    /// Whitespace characters
    Whitespace,
    /// Punctuation, symbols and anything else
    Punctuation,
}

impl CharClass {
    /// Letter and digit runs are highlightable words
    pub fn is_word(self) -> bool {
        matches!(self, CharClass::Letter | CharClass::Digit)
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::Whitespace => "space",
            CharClass::Punctuation => "punct",
        }
    }
}

/// Classify a single character. Letters win over digits, digits over whitespace.
pub fn char_class(ch: char) -> CharClass {
    if ch.is_alphabetic() {
        CharClass::Letter
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Punctuation
    }
}

/// A maximal run of one character class with its character offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub class: CharClass,
    pub is_word: bool,
}

impl Segment {
    /// Number of characters covered by this segment
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    /// Half-open overlap test against `[start, end)`
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start_offset < end && self.end_offset > start
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start_offset && offset < self.end_offset
    }
}

/// Split text into contiguous, classified segments.
///
/// Concatenating every segment's `content` reproduces `text` exactly, and
/// `segments[i].end_offset == segments[i + 1].start_offset`.
pub fn tokenize(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<(CharClass, usize, String)> = None;

    for (offset, ch) in text.chars().enumerate() {
        let class = char_class(ch);
        match current.as_mut() {
            Some((run_class, _, content)) if *run_class == class => content.push(ch),
            _ => {
                if let Some((run_class, start, content)) = current.take() {
                    segments.push(make_segment(run_class, start, offset, content));
                }
                current = Some((class, offset, ch.to_string()));
            }
        }
    }

    if let Some((run_class, start, content)) = current {
        let end = start + content.chars().count();
        segments.push(make_segment(run_class, start, end, content));
    }

    segments
}

fn make_segment(class: CharClass, start: usize, end: usize, content: String) -> Segment {
    Segment {
        content,
        start_offset: start,
        end_offset: end,
        class,
        is_word: class.is_word(),
    }
}

/// Find the segment containing a character offset
pub fn segment_at(segments: &[Segment], offset: usize) -> Option<&Segment> {
    let idx = segments.partition_point(|s| s.end_offset <= offset);
    segments.get(idx).filter(|s| s.contains(offset))
}

/// Substring by character offsets `[start, end)`, clamped to the text
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);
    &text[start_byte..end_byte]
}

fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Shrink `[start, end)` past leading and trailing whitespace.
///
/// Returns `None` when nothing but whitespace remains.
pub fn trimmed_span(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = char_slice(text, start, end);
    let leading = slice.chars().take_while(|c| c.is_whitespace()).count();
    let trailing = slice.chars().rev().take_while(|c| c.is_whitespace()).count();
    let len = slice.chars().count();
    if leading == len {
        return None;
    }
    Some((start + leading, start + len - trailing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.content.as_str()).collect()
    }

    #[test]
    fn test_tokenize_words_and_spaces() {
        let segments = tokenize("The Lord is good");
        assert_eq!(
            contents(&segments),
            vec!["The", " ", "Lord", " ", "is", " ", "good"]
        );
        assert_eq!(segments[2].start_offset, 4);
        assert_eq!(segments[2].end_offset, 8);
        assert!(segments[2].is_word);
        assert!(!segments[1].is_word);
    }

    #[test]
    fn test_letters_and_digits_split() {
        let segments = tokenize("Psalm23:1");
        assert_eq!(contents(&segments), vec!["Psalm", "23", ":", "1"]);
        assert_eq!(segments[1].class, CharClass::Digit);
        assert!(segments[1].is_word);
        assert_eq!(segments[2].class, CharClass::Punctuation);
        assert!(!segments[2].is_word);
    }

    #[test]
    fn test_punctuation_run_is_one_segment() {
        let segments = tokenize("amen...!");
        assert_eq!(contents(&segments), vec!["amen", "...!"]);
    }

    #[test]
    fn test_offsets_are_characters_not_bytes() {
        let segments = tokenize("Señor é bom");
        assert_eq!(contents(&segments), vec!["Señor", " ", "é", " ", "bom"]);
        assert_eq!(segments[0].end_offset, 5);
        assert_eq!(segments[2].start_offset, 6);
        assert_eq!(segments[2].end_offset, 7);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_segment_at() {
        let segments = tokenize("The Lord");
        assert_eq!(segment_at(&segments, 0).unwrap().content, "The");
        assert_eq!(segment_at(&segments, 3).unwrap().content, " ");
        assert_eq!(segment_at(&segments, 7).unwrap().content, "Lord");
        assert!(segment_at(&segments, 8).is_none());
    }

    #[test]
    fn test_char_slice_multibyte() {
        let text = "Señor é bom";
        assert_eq!(char_slice(text, 0, 5), "Señor");
        assert_eq!(char_slice(text, 6, 7), "é");
        assert_eq!(char_slice(text, 8, 100), "bom");
        assert_eq!(char_slice(text, 5, 5), "");
    }

    #[test]
    fn test_trimmed_span() {
        let text = "The Lord is";
        assert_eq!(trimmed_span(text, 0, 9), Some((0, 8)));
        assert_eq!(trimmed_span(text, 3, 4), None);
        assert_eq!(trimmed_span(text, 8, 11), Some((9, 11)));
    }
}
