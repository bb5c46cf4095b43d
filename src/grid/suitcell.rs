use crate::cards::Suit;

/// One of the 16 cells of the 4×4 suit grid.
///
/// Indexed row-major; both axes follow [`Suit::display`] order (spades,
/// hearts, diamonds, clubs). The row suit belongs to the rank cell's row
/// rank and the column suit to its column rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitCell(u8);

impl SuitCell {
    /// Every cell in grid order.
    pub fn all() -> impl Iterator<Item = SuitCell> {
        (0..crate::N_SUIT_CELLS as u8).map(SuitCell::from)
    }
    pub fn row(&self) -> usize {
        self.0 as usize / crate::N_SUITS
    }
    pub fn col(&self) -> usize {
        self.0 as usize % crate::N_SUITS
    }
    /// (row suit, column suit)
    pub fn suits(&self) -> (Suit, Suit) {
        (Suit::display()[self.row()], Suit::display()[self.col()])
    }
    /// Whether both axes name the same suit.
    pub fn is_diagonal(&self) -> bool {
        self.row() == self.col()
    }
    fn axis(suit: Suit) -> usize {
        crate::N_SUITS - 1 - u8::from(suit) as usize
    }
}

/// (row suit, column suit) isomorphism
impl From<(Suit, Suit)> for SuitCell {
    fn from((row, col): (Suit, Suit)) -> Self {
        Self((Self::axis(row) * crate::N_SUITS + Self::axis(col)) as u8)
    }
}
impl From<SuitCell> for (Suit, Suit) {
    fn from(cell: SuitCell) -> Self {
        cell.suits()
    }
}

/// u8 isomorphism
impl From<u8> for SuitCell {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::N_SUIT_CELLS, "invalid suit cell: {}", n);
        Self(n)
    }
}
impl From<SuitCell> for u8 {
    fn from(cell: SuitCell) -> u8 {
        cell.0
    }
}

/// str isomorphism
/// accepts two suit characters (`sh`) or a grid index (`1`)
impl TryFrom<&str> for SuitCell {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return match (n as usize) < crate::N_SUIT_CELLS {
                true => Ok(Self::from(n)),
                false => Err(format!("suit cell index out of range: {}", n)),
            };
        }
        match s.chars().collect::<Vec<char>>().as_slice() {
            [r, c] => {
                let r = Suit::try_from(*r).map_err(|c| format!("invalid suit: {}", c))?;
                let c = Suit::try_from(*c).map_err(|c| format!("invalid suit: {}", c))?;
                Ok(Self::from((r, c)))
            }
            _ => Err(format!("invalid suit cell: {}", s)),
        }
    }
}

impl std::fmt::Display for SuitCell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (r, c) = self.suits();
        write!(f, "{}{}", r, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_suits() {
        for cell in SuitCell::all() {
            assert_eq!(SuitCell::from(cell.suits()), cell);
        }
    }

    #[test]
    fn display_order() {
        assert_eq!(SuitCell::from(0u8).suits(), (Suit::S, Suit::S));
        assert_eq!(SuitCell::from(1u8).suits(), (Suit::S, Suit::H));
        assert_eq!(SuitCell::from(4u8).suits(), (Suit::H, Suit::S));
        assert_eq!(SuitCell::from(15u8).suits(), (Suit::C, Suit::C));
    }

    #[test]
    fn parse_str() {
        assert_eq!(SuitCell::try_from("sh"), Ok(SuitCell::from(1u8)));
        assert_eq!(SuitCell::try_from("15"), Ok(SuitCell::from(15u8)));
        assert!(SuitCell::try_from("16").is_err());
        assert!(SuitCell::try_from("sx").is_err());
        assert_eq!(SuitCell::from(1u8).to_string(), "sh");
    }

    #[test]
    fn four_diagonal() {
        assert_eq!(SuitCell::all().filter(SuitCell::is_diagonal).count(), 4);
    }
}
