use super::error::Malformed;
use super::ladder::Ladder;
use crate::cards::Card;
use crate::cards::Combo;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::grid::RankCell;
use crate::grid::Shape;
use crate::range::Range;
use std::cmp::Reverse;

/// Encoder sort key: (paired, hi, lo, kind, combo).
pub type Order = (u8, Reverse<Rank>, Reverse<Rank>, u8, Reverse<u16>);

/// One comma-separated term of range notation.
///
/// | text    | token                                   |
/// |---------|-----------------------------------------|
/// | `QQ`    | `Pair { rank: Q, plus: false }`         |
/// | `QQ+`   | `Pair { rank: Q, plus: true }`          |
/// | `AK`    | `Hand { shape: None, .. }`, both shapes |
/// | `AKs+`  | `Hand { shape: Some(Suited), plus, .. }`|
/// | `AsKh`  | `Combo(..)`, one specific combo         |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Token {
    Pair {
        rank: Rank,
        plus: bool,
    },
    Hand {
        hi: Rank,
        lo: Rank,
        shape: Option<Shape>,
        plus: bool,
    },
    Combo(Combo),
}

impl Token {
    /// Selects everything the token denotes.
    pub fn apply(&self, range: &mut Range) {
        match *self {
            Token::Combo(combo) => range.set_combo(combo, true),
            _ => self
                .cells()
                .into_iter()
                .for_each(|c| range.set_rank_cell(c, true)),
        }
    }
    /// The whole rank cells the token denotes; empty for a specific combo.
    pub fn cells(&self) -> Vec<RankCell> {
        match *self {
            Token::Combo(_) => vec![],
            Token::Pair { rank, plus } => Self::rungs(rank, rank, plus)
                .into_iter()
                .map(|(r, _)| RankCell::of(r, r, Shape::Pair))
                .collect(),
            Token::Hand {
                hi,
                lo,
                shape,
                plus,
            } => Self::rungs(hi, lo, plus)
                .into_iter()
                .flat_map(|(h, l)| match shape {
                    Some(s) => vec![RankCell::of(h, l, s)],
                    None => vec![
                        RankCell::of(h, l, Shape::Suited),
                        RankCell::of(h, l, Shape::Offsuit),
                    ],
                })
                .collect(),
        }
    }
    /// Sort key for encoder output: pairs first, then higher hands first,
    /// combined before suited before offsuit before loose combos.
    pub fn order(&self) -> Order {
        match *self {
            Token::Pair { rank, .. } => (0, Reverse(rank), Reverse(rank), 0, Reverse(0)),
            Token::Hand { hi, lo, shape, .. } => {
                let kind = match shape {
                    None => 0,
                    Some(Shape::Suited) => 1,
                    Some(_) => 2,
                };
                (1, Reverse(hi), Reverse(lo), kind, Reverse(0))
            }
            Token::Combo(combo) => (
                if combo.is_pair() { 0 } else { 1 },
                Reverse(combo.hi().rank()),
                Reverse(combo.lo().rank()),
                3,
                Reverse(u16::from(combo)),
            ),
        }
    }
    fn rungs(hi: Rank, lo: Rank, plus: bool) -> Vec<(Rank, Rank)> {
        match plus {
            true => Ladder::climb(hi, lo),
            false => vec![(hi.max(lo), hi.min(lo))],
        }
    }
    fn rank(c: char) -> Result<Rank, Malformed> {
        Rank::try_from(c).map_err(Malformed::UnknownRank)
    }
    fn suit(c: char) -> Result<Suit, Malformed> {
        Suit::try_from(c).map_err(Malformed::UnknownSuit)
    }
    fn shape(c: char) -> Result<Shape, Malformed> {
        match c.to_ascii_lowercase() {
            's' => Ok(Shape::Suited),
            'o' => Ok(Shape::Offsuit),
            _ => Err(Malformed::UnknownSuffix(c)),
        }
    }
    fn hand(a: Rank, b: Rank, shape: Option<Shape>, plus: bool) -> Result<Self, Malformed> {
        match (a == b, shape) {
            (true, None) => Ok(Token::Pair { rank: a, plus }),
            (true, Some(_)) => Err(Malformed::SuitedPair),
            (false, shape) => Ok(Token::Hand {
                hi: a.max(b),
                lo: a.min(b),
                shape,
                plus,
            }),
        }
    }
}

/// str isomorphism, up to case and rank order
impl TryFrom<&str> for Token {
    type Error = Malformed;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (body, plus) = match chars.split_last() {
            Some(('+', body)) => (body, true),
            _ => (chars.as_slice(), false),
        };
        match (body, plus) {
            ([a, b], _) => Self::hand(Self::rank(*a)?, Self::rank(*b)?, None, plus),
            ([a, b, x], _) => {
                let (a, b) = (Self::rank(*a)?, Self::rank(*b)?);
                Self::hand(a, b, Some(Self::shape(*x)?), plus)
            }
            ([r1, s1, r2, s2], false) => {
                let a = Card::from((Self::rank(*r1)?, Self::suit(*s1)?));
                let b = Card::from((Self::rank(*r2)?, Self::suit(*s2)?));
                match a == b {
                    true => Err(Malformed::SameCard),
                    false => Ok(Token::Combo(Combo::from((a, b)))),
                }
            }
            _ => Err(Malformed::Length(chars.len())),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let plus = |p: bool| if p { "+" } else { "" };
        match *self {
            Token::Pair { rank, plus: p } => write!(f, "{}{}{}", rank, rank, plus(p)),
            Token::Hand {
                hi,
                lo,
                shape,
                plus: p,
            } => write!(
                f,
                "{}{}{}{}",
                hi,
                lo,
                shape.map(|s| s.suffix()).unwrap_or(""),
                plus(p)
            ),
            Token::Combo(combo) => write!(f, "{}", combo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str) -> usize {
        let mut range = Range::empty();
        Token::try_from(s).unwrap().apply(&mut range);
        range.combo_count()
    }

    #[test]
    fn parse_shapes() {
        assert_eq!(
            Token::try_from("QQ+"),
            Ok(Token::Pair {
                rank: Rank::Queen,
                plus: true
            })
        );
        assert_eq!(
            Token::try_from("KAs"),
            Ok(Token::Hand {
                hi: Rank::Ace,
                lo: Rank::King,
                shape: Some(Shape::Suited),
                plus: false
            })
        );
        assert!(matches!(Token::try_from("AsKd"), Ok(Token::Combo(_))));
    }

    #[test]
    fn counts() {
        assert_eq!(count("QQ"), 6);
        assert_eq!(count("QQ+"), 18);
        assert_eq!(count("AKs"), 4);
        assert_eq!(count("AKo"), 12);
        assert_eq!(count("AK"), 16);
        assert_eq!(count("AJ+"), 48);
        assert_eq!(count("76s+"), 32);
        assert_eq!(count("AhKh"), 1);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Token::try_from("aks"), Token::try_from("AKs"));
        assert_eq!(Token::try_from("AKS"), Token::try_from("AKs"));
        assert_eq!(Token::try_from("tt+"), Token::try_from("TT+"));
    }

    #[test]
    fn malformed() {
        assert_eq!(Token::try_from("XY"), Err(Malformed::UnknownRank('X')));
        assert_eq!(Token::try_from("AKx"), Err(Malformed::UnknownSuffix('x')));
        assert_eq!(Token::try_from("AAs"), Err(Malformed::SuitedPair));
        assert_eq!(Token::try_from("AsAs"), Err(Malformed::SameCard));
        assert_eq!(Token::try_from("AxKs"), Err(Malformed::UnknownSuit('x')));
        assert_eq!(Token::try_from("A"), Err(Malformed::Length(1)));
        assert_eq!(Token::try_from("AsKs+"), Err(Malformed::Length(5)));
        assert_eq!(Token::try_from("+"), Err(Malformed::Length(1)));
    }

    #[test]
    fn display_is_canonical() {
        for s in ["QQ+", "AKs", "72o", "JT", "76s+", "A2o+", "AsKh"] {
            assert_eq!(Token::try_from(s).unwrap().to_string(), s);
        }
        assert_eq!(Token::try_from("KA").unwrap().to_string(), "AK");
    }
}
