use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`, so cards sort first by rank, then by suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank(), c.suit())
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [r, u] => {
                let rank = Rank::try_from(*r).map_err(|c| format!("invalid rank: {}", c))?;
                let suit = Suit::try_from(*u).map_err(|c| format!("invalid suit: {}", c))?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert_eq!(u8::from(Card::from(n)), n);
        }
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Ten, Suit::S));
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::S);
    }

    #[test]
    fn parse_str() {
        assert_eq!(Card::try_from("As"), Ok(Card::from((Rank::Ace, Suit::S))));
        assert_eq!(Card::try_from("2c"), Ok(Card::from(0u8)));
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("A").is_err());
        assert_eq!(Card::from((Rank::Nine, Suit::H)).to_string(), "9h");
    }

    #[test]
    fn ordering_by_rank_then_suit() {
        let kc = Card::from((Rank::King, Suit::C));
        let ks = Card::from((Rank::King, Suit::S));
        let ac = Card::from((Rank::Ace, Suit::C));
        assert!(kc < ks);
        assert!(ks < ac);
    }
}
