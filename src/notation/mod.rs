//! Range notation: `QQ+,AKs,72o`.
//!
//! A comma-separated list of [`Token`]s, unioned. Parsing is atomic: a
//! malformed token yields a [`NotationError`] and no range. Encoding via
//! `Display` produces a short, stable token list that parses back to the
//! same range.
mod encode;

mod error;
pub use error::*;

pub mod ladder;
pub use ladder::*;

pub mod parse;
pub use parse::*;

pub mod token;
pub use token::*;

#[cfg(all(test, feature = "client"))]
mod tests {
    use crate::range::Range;

    #[test]
    fn serde_as_notation() {
        let range = Range::try_from("QQ+,AKs").unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "\"QQ+,AKs\"");
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), range);
        assert!(serde_json::from_str::<Range>("\"QQ+,XX\"").is_err());
    }
}
