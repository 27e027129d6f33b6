//! Stable key generation from Chinese text.
//!
//! A key is a deterministic, human-scannable identifier derived from the
//! literal text: punctuation and whitespace are stripped, Han characters are
//! romanized to tone-less pinyin syllables, and long texts are truncated with
//! an MD5-derived suffix so that distinct texts sharing a prefix still get
//! distinct keys.

use pinyin::ToPinyin;

/// Texts at or above this stripped length are truncated and disambiguated
/// with a content hash; shorter texts are transliterated verbatim.
const LONG_TEXT_THRESHOLD: usize = 16;

/// Number of leading characters kept from a long text.
const TRUNCATED_LEN: usize = 4;

/// Number of hex characters taken from the MD5 digest as a disambiguator.
const HASH_LEN: usize = 4;

/// Punctuation and symbol characters removed before key derivation, both
/// ASCII and common full-width CJK forms.
const SYMBOLS: &[char] = &[
    '`', '~', '!', '@', '#', '_', '$', '%', '^', '&', '*', '(', ')', '=', '|', '{', '}', '\'',
    ':', ';', ',', '\\', '[', ']', '.', '<', '>', '/', '?', '！', '￥', '…', '（', '）', '—',
    '【', '】', '‘', '；', '：', '”', '“', '。', '，', '、', '？',
];

/// Derive a stable key from literal text.
///
/// Identical input always yields the identical key, within and across files.
/// Purely symbolic or whitespace input can legally degenerate to an empty
/// string; callers only feed text that contains at least one Han ideograph,
/// which always survives stripping.
///
/// # Examples
///
/// ```
/// use hanlift::keygen::generate_key;
///
/// assert_eq!(generate_key("你好"), "ni_hao");
/// assert_eq!(generate_key("你好，世界"), "ni_hao_shi_jie");
/// ```
pub fn generate_key(text: &str) -> String {
    let stripped = strip_whitespace(&strip_symbols(text));
    let (input, disambiguator) = shorten(&stripped);

    let mut parts: Vec<String> = syllables(&input)
        .into_iter()
        .map(|s| strip_whitespace(&strip_symbols(&s)))
        .filter(|s| !s.is_empty())
        .collect();
    if !disambiguator.is_empty() {
        parts.push(disambiguator);
    }
    parts.join("_").to_lowercase()
}

/// Long-text policy: below the threshold the stripped text is used verbatim
/// with an empty disambiguator; at or above it, only the first few characters
/// are transliterated and a short content hash of the full text is appended.
fn shorten(stripped: &str) -> (String, String) {
    if stripped.chars().count() < LONG_TEXT_THRESHOLD {
        return (stripped.to_string(), String::new());
    }
    let head: String = stripped.chars().take(TRUNCATED_LEN).collect();
    let digest = format!("{:x}", md5::compute(stripped.as_bytes()));
    (head, digest[..HASH_LEN].to_string())
}

/// Flatten text into an ordered sequence of syllables: one pinyin syllable
/// per Han character, with runs of non-Han characters passed through as a
/// single group.
fn syllables(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut run = String::new();
    for (c, py) in text.chars().zip(text.to_pinyin()) {
        match py {
            Some(p) => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
                out.push(p.plain().to_string());
            }
            None => run.push(c),
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

fn strip_symbols(text: &str) -> String {
    text.chars().filter(|c| !SYMBOLS.contains(c)).collect()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
