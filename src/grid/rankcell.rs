use super::shape::Shape;
use crate::cards::Combo;
use crate::cards::Rank;

/// One of the 169 cells of the 13×13 rank grid.
///
/// Indexed row-major from the top-left. Both axes run Ace to Two, so index
/// `0` is `AA`, `1` is `AKs`, `13` is `AKo` and `168` is `22`. A cell is a
/// Pair on the diagonal, Suited when the row rank is above the column rank,
/// and Offsuit otherwise.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct RankCell(u8);

impl RankCell {
    /// Every cell in grid order.
    pub fn all() -> impl Iterator<Item = RankCell> {
        (0..crate::N_RANK_CELLS as u8).map(RankCell::from)
    }
    /// Every cell of one shape in grid order.
    pub fn shaped(shape: Shape) -> impl Iterator<Item = RankCell> {
        Self::all().filter(move |c| c.shape() == shape)
    }
    /// The cell holding `hi`/`lo` hands of the given shape.
    /// Rank order of the arguments does not matter.
    pub fn of(a: Rank, b: Rank, shape: Shape) -> Self {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        match shape {
            Shape::Pair => {
                assert!(hi == lo, "pair cell needs one rank: {}{}", hi, lo);
                Self::from((hi, hi))
            }
            Shape::Suited => {
                assert!(hi != lo, "suited cell needs two ranks: {}{}", hi, lo);
                Self::from((hi, lo))
            }
            Shape::Offsuit => {
                assert!(hi != lo, "offsuit cell needs two ranks: {}{}", hi, lo);
                Self::from((lo, hi))
            }
        }
    }
    pub fn row(&self) -> usize {
        self.0 as usize / crate::N_RANKS
    }
    pub fn col(&self) -> usize {
        self.0 as usize % crate::N_RANKS
    }
    /// (row rank, column rank)
    pub fn ranks(&self) -> (Rank, Rank) {
        (Self::rank(self.row()), Self::rank(self.col()))
    }
    pub fn hi(&self) -> Rank {
        let (r, c) = self.ranks();
        r.max(c)
    }
    pub fn lo(&self) -> Rank {
        let (r, c) = self.ranks();
        r.min(c)
    }
    pub fn shape(&self) -> Shape {
        let (r, c) = self.ranks();
        match r.cmp(&c) {
            std::cmp::Ordering::Equal => Shape::Pair,
            std::cmp::Ordering::Greater => Shape::Suited,
            std::cmp::Ordering::Less => Shape::Offsuit,
        }
    }
    /// The distinct combos this cell owns: 6, 4 or 12.
    pub fn combos(self) -> impl Iterator<Item = Combo> {
        let shape = self.shape();
        Combo::of(self.hi(), self.lo()).filter(move |c| Shape::from(*c) == shape)
    }
    /// Display label, e.g. `AA`, `AKs`, `72o`.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.hi(), self.lo(), self.shape().suffix())
    }
    fn rank(axis: usize) -> Rank {
        Rank::descending()[axis]
    }
    fn axis(rank: Rank) -> usize {
        crate::N_RANKS - 1 - u8::from(rank) as usize
    }
}

/// (row rank, column rank) isomorphism
impl From<(Rank, Rank)> for RankCell {
    fn from((row, col): (Rank, Rank)) -> Self {
        Self((Self::axis(row) * crate::N_RANKS + Self::axis(col)) as u8)
    }
}
impl From<RankCell> for (Rank, Rank) {
    fn from(cell: RankCell) -> Self {
        cell.ranks()
    }
}

/// u8 isomorphism
impl From<u8> for RankCell {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::N_RANK_CELLS, "invalid rank cell: {}", n);
        Self(n)
    }
}
impl From<RankCell> for u8 {
    fn from(cell: RankCell) -> u8 {
        cell.0
    }
}
impl From<RankCell> for usize {
    fn from(cell: RankCell) -> usize {
        cell.0 as usize
    }
}

/// the cell that owns a combo
impl From<Combo> for RankCell {
    fn from(combo: Combo) -> Self {
        Self::of(combo.hi().rank(), combo.lo().rank(), Shape::from(combo))
    }
}

/// str isomorphism
/// accepts a display label (`AKs`, case-insensitive) or a grid index (`1`)
impl TryFrom<&str> for RankCell {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return match (n as usize) < crate::N_RANK_CELLS {
                true => Ok(Self::from(n)),
                false => Err(format!("rank cell index out of range: {}", n)),
            };
        }
        super::LABELS
            .iter()
            .position(|label| label.eq_ignore_ascii_case(s))
            .map(|i| Self::from(i as u8))
            .ok_or_else(|| format!("invalid rank cell: {}", s))
    }
}

impl std::fmt::Display for RankCell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
