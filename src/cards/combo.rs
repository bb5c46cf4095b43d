use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// One unordered two-card starting hand.
///
/// Stored with the higher-indexed card first, so `AhAs` and `AsAh` are the
/// same value. There are exactly C(52, 2) = 1,326 of them, densely indexed
/// in colexicographic order: for cards `lo < hi` the index is
/// `hi * (hi - 1) / 2 + lo`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Combo {
    hi: Card,
    lo: Card,
}

impl Combo {
    /// The higher card (by rank, then suit).
    pub fn hi(&self) -> Card {
        self.hi
    }
    /// The lower card (by rank, then suit).
    pub fn lo(&self) -> Card {
        self.lo
    }
    pub fn is_pair(&self) -> bool {
        self.hi.rank() == self.lo.rank()
    }
    pub fn is_suited(&self) -> bool {
        self.hi.suit() == self.lo.suit()
    }
    /// Iterates the whole 1,326-combo universe in index order.
    pub fn all() -> impl Iterator<Item = Combo> {
        (0..crate::N_COMBOS as u16).map(Combo::from)
    }
    /// Every combo made of one card of each given rank.
    /// Six for a pair, sixteen for two distinct ranks.
    pub fn of(a: Rank, b: Rank) -> impl Iterator<Item = Combo> {
        Suit::all()
            .into_iter()
            .flat_map(move |x| Suit::all().into_iter().map(move |y| (x, y)))
            .map(move |(x, y)| (Card::from((a, x)), Card::from((b, y))))
            .filter(move |(x, y)| a != b || x < y)
            .map(Combo::from)
    }
}

/// (Card, Card) isomorphism, up to order
impl From<(Card, Card)> for Combo {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "combo requires two distinct cards: {}", a);
        if a > b {
            Self { hi: a, lo: b }
        } else {
            Self { hi: b, lo: a }
        }
    }
}
impl From<Combo> for (Card, Card) {
    fn from(c: Combo) -> Self {
        (c.hi, c.lo)
    }
}

/// u16 isomorphism
/// dense colex index into 0..1326
impl From<Combo> for u16 {
    fn from(c: Combo) -> u16 {
        let hi = u8::from(c.hi) as u16;
        let lo = u8::from(c.lo) as u16;
        hi * (hi - 1) / 2 + lo
    }
}
impl From<u16> for Combo {
    fn from(n: u16) -> Self {
        assert!((n as usize) < crate::N_COMBOS, "invalid combo u16: {}", n);
        let hi = (1..52u16)
            .take_while(|h| h * (h - 1) / 2 <= n)
            .last()
            .expect("n < 1326 has a high card");
        let lo = n - hi * (hi - 1) / 2;
        Self {
            hi: Card::from(hi as u8),
            lo: Card::from(lo as u8),
        }
    }
}

/// u64 representation
/// two bits turned on, one per card
impl From<Combo> for u64 {
    fn from(c: Combo) -> u64 {
        u64::from(c.hi) | u64::from(c.lo)
    }
}

/// str isomorphism
/// four characters, e.g. AsKd
impl TryFrom<&str> for Combo {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            4 if s.is_char_boundary(2) => {
                let a = Card::try_from(&s[0..2])?;
                let b = Card::try_from(&s[2..4])?;
                match a == b {
                    true => Err(format!("cards cannot be the same: {}", s)),
                    false => Ok(Self::from((a, b))),
                }
            }
            _ => Err(format!("combo must be 4 characters: {}", s)),
        }
    }
}

impl Arbitrary for Combo {
    fn random() -> Self {
        Self::from(rand::random_range(0..crate::N_COMBOS as u16))
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u16() {
        for n in 0..crate::N_COMBOS as u16 {
            assert_eq!(u16::from(Combo::from(n)), n);
        }
    }

    #[test]
    fn unordered() {
        let a = Card::from((Rank::Ace, Suit::S));
        let b = Card::from((Rank::King, Suit::H));
        assert_eq!(Combo::from((a, b)), Combo::from((b, a)));
        assert_eq!(Combo::from((b, a)).hi(), a);
    }

    #[test]
    fn universe_is_distinct() {
        let masks = Combo::all()
            .map(u64::from)
            .collect::<std::collections::HashSet<u64>>();
        assert_eq!(masks.len(), 1326);
        assert!(masks.iter().all(|m| m.count_ones() == 2));
    }

    #[test]
    fn combos_of_ranks() {
        assert_eq!(Combo::of(Rank::Ace, Rank::Ace).count(), 6);
        assert_eq!(Combo::of(Rank::Ace, Rank::King).count(), 16);
        assert_eq!(Combo::of(Rank::Ace, Rank::King).filter(Combo::is_suited).count(), 4);
        assert!(Combo::of(Rank::Ace, Rank::Ace).all(|c| c.is_pair()));
    }

    #[test]
    fn parse_str() {
        let combo = Combo::try_from("KhAs").unwrap();
        assert_eq!(combo.to_string(), "AsKh");
        assert!(Combo::try_from("AsAs").is_err());
        assert!(Combo::try_from("AsK").is_err());
        assert!(Combo::try_from("AsKx").is_err());
    }

    #[test]
    fn random_in_universe() {
        for _ in 0..64 {
            assert!((u16::from(Combo::random()) as usize) < crate::N_COMBOS);
        }
    }
}
