use super::rankcell::RankCell;
use super::suitcell::SuitCell;

/// Why a suit address does not name a combo of its rank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidity {
    /// Pair cell addressed with one suit twice: the same card twice.
    SameCard,
    /// Suited cell with two suits, or offsuit cell with one.
    ShapeMismatch,
}

/// A suit address that resolves to no combo of its rank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCellError {
    pub rank: RankCell,
    pub suit: SuitCell,
    pub reason: Invalidity,
}

impl std::fmt::Display for InvalidCellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            Invalidity::SameCard => {
                write!(f, "invalid cell {} {}: same card twice", self.rank, self.suit)
            }
            Invalidity::ShapeMismatch => {
                write!(
                    f,
                    "invalid cell {} {}: suits do not match {} shape",
                    self.rank,
                    self.suit,
                    self.rank.shape()
                )
            }
        }
    }
}

impl std::error::Error for InvalidCellError {}
