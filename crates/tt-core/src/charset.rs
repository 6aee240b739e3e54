/// Printable ASCII: letters, digits, punctuation and space (95 characters).
pub const CHARSET_PRINTABLE: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " "
);

/// 10 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 caractères — Paul Bourke extended.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Minimal — haut contraste.
pub const CHARSET_MINIMAL: &str = " .:#";

/// Digital Matrix — purisme binaire.
pub const CHARSET_DIGITAL: &str = " 01";

/// Resolve a named preset (`printable`, `compact`, `standard`, `minimal`, `digital`).
///
/// # Example
/// ```
/// use tt_core::charset::preset;
/// assert_eq!(preset("digital"), Some(" 01"));
/// assert!(preset("nope").is_none());
/// ```
#[must_use]
pub fn preset(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "printable" | "default" => Some(CHARSET_PRINTABLE),
        "compact" => Some(CHARSET_COMPACT),
        "standard" => Some(CHARSET_STANDARD),
        "minimal" => Some(CHARSET_MINIMAL),
        "digital" => Some(CHARSET_DIGITAL),
        _ => None,
    }
}

/// Candidate characters for calibration, distinct, in first-seen order.
///
/// Order only matters for tie-breaking during calibration.
///
/// # Example
/// ```
/// use tt_core::charset::Charset;
/// let cs = Charset::new("aabca");
/// assert_eq!(cs.chars(), &['a', 'b', 'c']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Build a charset, dropping repeated characters.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if !chars.contains(&ch) {
                chars.push(ch);
            }
        }
        Self { chars }
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::new(CHARSET_PRINTABLE)
    }
}
