//! Alphabet symbols and the reserved empty-word token.

use core::fmt;

/// The reserved token labelling epsilon (empty-word) transitions.
pub const EPSILON: &str = "ε";

/// Alternative spellings of the empty word accepted on input.
const EPSILON_SPELLINGS: [&str; 3] = [EPSILON, "&", "𝜀"];

/// An opaque alphabet token, or the reserved epsilon token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Symbol(String);

impl Symbol {
    /// Construct a symbol from its text.
    /// Any spelling of the empty word is normalized to [`EPSILON`].
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        if is_epsilon_spelling(&text) {
            Self::epsilon()
        } else {
            Symbol(text)
        }
    }

    /// The epsilon symbol.
    #[inline]
    pub fn epsilon() -> Self {
        Symbol(EPSILON.to_string())
    }

    /// \return whether this is the reserved epsilon token.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.0 == EPSILON
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// \return whether \p text spells the empty word.
pub fn is_epsilon_spelling(text: &str) -> bool {
    EPSILON_SPELLINGS.contains(&text)
}

impl From<&str> for Symbol {
    #[inline]
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<char> for Symbol {
    #[inline]
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Symbol::new(&*c.encode_utf8(&mut buf))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
