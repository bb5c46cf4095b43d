use super::error::InvalidCellError;
use super::error::Invalidity;
use super::rankcell::RankCell;
use super::shape::Shape;
use super::suitcell::SuitCell;
use crate::cards::Card;
use crate::cards::Combo;

/// A (rank cell, suit cell) coordinate in the drill-down view.
///
/// Names the candidate combo `{(row rank, row suit), (col rank, col suit)}`.
/// The address is valid when that candidate is a real combo of the rank
/// cell's shape:
///
/// | shape   | valid suit cells       | distinct combos |
/// |---------|------------------------|-----------------|
/// | pair    | 12 off-diagonal        | 6 (each twice)  |
/// | suited  | 4 on the diagonal      | 4               |
/// | offsuit | 12 off-diagonal        | 12              |
///
/// Every combo is reachable from exactly one rank cell, through one suit
/// cell (two mirrored ones for pairs).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    rank: RankCell,
    suit: SuitCell,
}

impl Address {
    pub fn rank(&self) -> RankCell {
        self.rank
    }
    pub fn suit(&self) -> SuitCell {
        self.suit
    }
    pub fn is_valid(&self) -> bool {
        self.invalidity().is_none()
    }
    /// Resolves the address to the combo it names.
    pub fn combo(&self) -> Result<Combo, InvalidCellError> {
        match self.invalidity() {
            Some(reason) => Err(InvalidCellError {
                rank: self.rank,
                suit: self.suit,
                reason,
            }),
            None => Ok(Combo::from(self.cards())),
        }
    }
    /// Every address that resolves to the given combo.
    /// One for suited and offsuit combos, the two mirrored ones for pairs.
    pub fn aliases(combo: Combo) -> Vec<Address> {
        let rank = RankCell::from(combo);
        let hi = combo.hi().suit();
        let lo = combo.lo().suit();
        match rank.shape() {
            Shape::Pair => vec![
                Address::from((rank, SuitCell::from((hi, lo)))),
                Address::from((rank, SuitCell::from((lo, hi)))),
            ],
            Shape::Suited => vec![Address::from((rank, SuitCell::from((hi, lo))))],
            Shape::Offsuit => vec![Address::from((rank, SuitCell::from((lo, hi))))],
        }
    }
    /// Every valid address under one rank cell, in suit-grid order.
    pub fn valid(rank: RankCell) -> impl Iterator<Item = Address> {
        SuitCell::all()
            .map(move |suit| Address::from((rank, suit)))
            .filter(Address::is_valid)
    }
    fn cards(&self) -> (Card, Card) {
        let (rr, cr) = self.rank.ranks();
        let (rs, cs) = self.suit.suits();
        (Card::from((rr, rs)), Card::from((cr, cs)))
    }
    fn invalidity(&self) -> Option<Invalidity> {
        match (self.rank.shape(), self.suit.is_diagonal()) {
            (Shape::Pair, true) => Some(Invalidity::SameCard),
            (Shape::Suited, false) => Some(Invalidity::ShapeMismatch),
            (Shape::Offsuit, true) => Some(Invalidity::ShapeMismatch),
            _ => None,
        }
    }
}

impl From<(RankCell, SuitCell)> for Address {
    fn from((rank, suit): (RankCell, SuitCell)) -> Self {
        Self { rank, suit }
    }
}
impl From<Address> for (RankCell, SuitCell) {
    fn from(address: Address) -> Self {
        (address.rank, address.suit)
    }
}

/// higher rank's card first, e.g. A♠K♥
impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (a, b) = self.cards();
        let (a, b) = if b.rank() > a.rank() { (b, a) } else { (a, b) };
        write!(
            f,
            "{}{}{}{}",
            a.rank(),
            a.suit().ascii(),
            b.rank(),
            b.suit().ascii()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    #[test]
    fn valid_counts_per_shape() {
        for cell in RankCell::all() {
            let n = Address::valid(cell).count();
            match cell.shape() {
                Shape::Pair => assert_eq!(n, 12),
                Shape::Suited => assert_eq!(n, 4),
                Shape::Offsuit => assert_eq!(n, 12),
            }
        }
    }

    #[test]
    fn pair_diagonal_is_same_card() {
        let aa = RankCell::from(0u8);
        for suit in SuitCell::all().filter(SuitCell::is_diagonal) {
            let err = Address::from((aa, suit)).combo().unwrap_err();
            assert_eq!(err.reason, Invalidity::SameCard);
        }
    }

    #[test]
    fn suited_off_diagonal_is_mismatch() {
        let aks = RankCell::from(1u8);
        let err = Address::from((aks, SuitCell::from(1u8))).combo().unwrap_err();
        assert_eq!(err.reason, Invalidity::ShapeMismatch);
    }

    #[test]
    fn offsuit_row_suit_goes_to_row_rank() {
        let ako = RankCell::from(13u8);
        let suit = SuitCell::from((Suit::H, Suit::S));
        let combo = Address::from((ako, suit)).combo().unwrap();
        assert_eq!(combo.hi(), Card::from((Rank::Ace, Suit::S)));
        assert_eq!(combo.lo(), Card::from((Rank::King, Suit::H)));
    }

    #[test]
    fn aliases_resolve_back() {
        for combo in Combo::all() {
            let aliases = Address::aliases(combo);
            assert_eq!(aliases.len(), if combo.is_pair() { 2 } else { 1 });
            assert!(aliases.iter().all(|a| a.combo() == Ok(combo)));
        }
    }

    #[test]
    fn pair_mirrors_alias() {
        let kk = RankCell::of(Rank::King, Rank::King, Shape::Pair);
        let a = Address::from((kk, SuitCell::from((Suit::S, Suit::H))));
        let b = Address::from((kk, SuitCell::from((Suit::H, Suit::S))));
        assert_eq!(a.combo(), b.combo());
    }

    #[test]
    fn cells_cover_universe_once() {
        let mut seen = [0u8; crate::N_COMBOS];
        for cell in RankCell::all() {
            let mut combos = Address::valid(cell)
                .map(|a| a.combo().unwrap())
                .collect::<Vec<Combo>>();
            combos.sort();
            combos.dedup();
            for combo in combos {
                seen[u16::from(combo) as usize] += 1;
            }
        }
        assert!(seen.iter().all(|n| *n == 1));
    }

    #[test]
    fn display_high_rank_first() {
        let ako = RankCell::from(13u8);
        let address = Address::from((ako, SuitCell::from((Suit::H, Suit::S))));
        assert_eq!(address.to_string(), "A♠K♥");
    }
}
