//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode Han ideograph.
///
/// This is the sole trigger condition for extraction: Latin-only text,
/// numbers, and symbols are never internationalized.
///
/// # Examples
///
/// ```
/// use hanlift::utils::contains_han;
///
/// assert!(contains_han("你好"));
/// assert!(contains_han("Error: 找不到文件"));
/// assert!(!contains_han("Hello"));
/// assert!(!contains_han("123"));
/// assert!(!contains_han(""));
/// ```
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Unicode Han ideograph test, covering the unified blocks plus the
/// compatibility block.
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'       // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'     // Extension A
        | '\u{20000}'..='\u{2A6DF}'   // Extension B
        | '\u{2A700}'..='\u{2EBEF}'   // Extensions C-F
        | '\u{F900}'..='\u{FAFF}'     // Compatibility Ideographs
        | '\u{30000}'..='\u{3134F}'   // Extension G
    )
}
