use super::error::NotationError;
use super::token::Token;
use crate::range::Range;

/// Splits notation into tokens, keeping each token's list position and byte
/// offset. Blank entries are skipped.
fn tokenize(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    text.split(',')
        .scan(0, |offset, part| {
            let start = *offset;
            *offset += part.len() + 1;
            Some((start, part))
        })
        .enumerate()
        .map(|(index, (start, part))| {
            let lead = part.len() - part.trim_start().len();
            (index, start + lead, part.trim())
        })
        .filter(|(_, _, token)| !token.is_empty())
}

/// Parses range notation into a fresh range.
///
/// Tokens are unioned; order and repetition do not matter. Nothing is
/// returned unless every token parses.
pub fn parse(text: &str) -> Result<Range, NotationError> {
    let mut range = Range::empty();
    for (index, offset, token) in tokenize(text) {
        let parsed = Token::try_from(token).map_err(|reason| NotationError {
            token: token.to_string(),
            index,
            offset,
            reason,
        })?;
        log::trace!("{:<32}{:<8}{}", "expand token", token, parsed);
        parsed.apply(&mut range);
    }
    log::debug!("{:<32}{} combos", "parsed range", range.combo_count());
    Ok(range)
}

impl Range {
    /// Unions parsed notation into this range.
    /// On error the range is left exactly as it was.
    pub fn absorb(&mut self, text: &str) -> Result<(), NotationError> {
        let parsed = parse(text)?;
        *self |= parsed;
        Ok(())
    }
}

/// str isomorphism
impl TryFrom<&str> for Range {
    type Error = NotationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}
impl TryFrom<String> for Range {
    type Error = NotationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse(&s)
    }
}
impl std::str::FromStr for Range {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::grid::RankCell;
    use crate::grid::Shape;
    use crate::notation::Malformed;
    use crate::range::CellState;

    fn cell(label: &str) -> RankCell {
        RankCell::all().find(|c| c.label() == label).unwrap()
    }

    #[test]
    fn pair_plus() {
        let range = Range::try_from("QQ+").unwrap();
        assert_eq!(range.combo_count(), 18);
        for label in ["QQ", "KK", "AA"] {
            assert_eq!(range.cell_state(cell(label)), CellState::All);
        }
        assert_eq!(range.cell_state(cell("JJ")), CellState::None);
    }

    #[test]
    fn suited_offsuit_union() {
        let s = Range::try_from("AKs").unwrap();
        let o = Range::try_from("AKo").unwrap();
        let both = Range::try_from("AK").unwrap();
        assert_eq!(s.combo_count(), 4);
        assert_eq!(o.combo_count(), 12);
        assert_eq!(both.combo_count(), 16);
        assert_eq!(s | o, both);
    }

    #[test]
    fn kicker_plus() {
        let range = Range::try_from("AJ+").unwrap();
        let expect = Range::try_from("AJ,AQ,AK").unwrap();
        assert_eq!(range, expect);
    }

    #[test]
    fn connector_plus() {
        let range = Range::try_from("76s+").unwrap();
        let expect = Range::try_from("76s,87s,98s,T9s,JTs,QJs,KQs,AKs").unwrap();
        assert_eq!(range, expect);
        assert_eq!(range.combo_count(), 32);
    }

    #[test]
    fn blank_and_whitespace() {
        assert!(Range::try_from("").unwrap().is_empty());
        assert!(Range::try_from(" , ,").unwrap().is_empty());
        let spaced = Range::try_from(" QQ+ ,  AKs ,72o,").unwrap();
        let tight = Range::try_from("QQ+,AKs,72o").unwrap();
        assert_eq!(spaced, tight);
        assert_eq!(tight.combo_count(), 18 + 4 + 12);
    }

    #[test]
    fn duplicates_union() {
        assert_eq!(
            Range::try_from("AA,AA,KK+").unwrap(),
            Range::try_from("KK+").unwrap()
        );
    }

    #[test]
    fn error_position() {
        let err = Range::try_from("QQ+, AKs, 7Xo").unwrap_err();
        assert_eq!(err.token, "7Xo");
        assert_eq!(err.index, 2);
        assert_eq!(err.offset, 10);
        assert_eq!(err.reason, Malformed::UnknownRank('X'));
    }

    #[test]
    fn absorb_is_atomic() {
        let mut range = Range::try_from("22").unwrap();
        let before = range;
        assert!(range.absorb("AA,KK,ZZ").is_err());
        assert_eq!(range, before);
        range.absorb("AA").unwrap();
        assert_eq!(range.combo_count(), 12);
        assert_eq!(
            range.cell_state(RankCell::of(Rank::Ace, Rank::Ace, Shape::Pair)),
            CellState::All
        );
    }

    #[test]
    fn from_str() {
        let range = "TT+,AQs+".parse::<Range>().unwrap();
        assert_eq!(range.combo_count(), 30 + 8);
    }
}
