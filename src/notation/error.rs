/// What is wrong with a single notation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A character where a rank (`2`-`9`, `T`, `J`, `Q`, `K`, `A`) belongs.
    UnknownRank(char),
    /// A character where a suit (`s`, `h`, `d`, `c`) belongs.
    UnknownSuit(char),
    /// A shape suffix other than `s` or `o`.
    UnknownSuffix(char),
    /// A pair with a shape suffix, e.g. `AAs`.
    SuitedPair,
    /// A specific combo naming one card twice, e.g. `AsAs`.
    SameCard,
    /// A token of no recognized length.
    Length(usize),
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRank(c) => write!(f, "unknown rank '{}'", c),
            Self::UnknownSuit(c) => write!(f, "unknown suit '{}'", c),
            Self::UnknownSuffix(c) => write!(f, "unknown suffix '{}'", c),
            Self::SuitedPair => write!(f, "pairs take no suffix"),
            Self::SameCard => write!(f, "same card twice"),
            Self::Length(n) => write!(f, "unexpected length {}", n),
        }
    }
}

/// Range notation that failed to parse.
///
/// Carries the offending token as written, its zero-based position in the
/// comma-separated list, and its byte offset in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationError {
    pub token: String,
    pub index: usize,
    pub offset: usize,
    pub reason: Malformed,
}

impl std::fmt::Display for NotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid token '{}' (#{} at byte {}): {}",
            self.token, self.index, self.offset, self.reason
        )
    }
}

impl std::error::Error for NotationError {}
