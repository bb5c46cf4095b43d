use crate::cards::Rank;

/// A `+` extension axis through the rank grid.
///
/// Each ladder is an ordered list of `(hi, lo)` rungs ending at a fixed top.
/// A `+` token names a start rung and selects it together with every rung
/// above it on the same ladder.
///
/// - `Pairs`: `22, 33, …, AA`
/// - `Kicker`: `A2, A3, …, AK`, the Ace held and the kicker raised
/// - `Gap(g)`: `(2+g)2, (3+g)3, …, A(A-g)`, the gap held and both ranks raised
///
/// The ladder of a start rung is decided by [`Ladder::of`], so parser and
/// encoder always agree on what `XY+` means.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Ladder {
    Pairs,
    Kicker,
    Gap(u8),
}

impl Ladder {
    /// The ladder a rung climbs along.
    pub fn of(a: Rank, b: Rank) -> Self {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        match (hi == lo, hi == Rank::Ace) {
            (true, _) => Ladder::Pairs,
            (false, true) => Ladder::Kicker,
            (false, false) => Ladder::Gap(u8::from(hi) - u8::from(lo)),
        }
    }
    /// Every ladder through non-pair cells: the kicker ladder, then gaps 1 to 11.
    pub fn unpaired() -> impl Iterator<Item = Ladder> {
        std::iter::once(Ladder::Kicker).chain((1..=11).map(Ladder::Gap))
    }
    /// Rungs from bottom to top.
    pub fn rungs(&self) -> Vec<(Rank, Rank)> {
        match *self {
            Ladder::Pairs => Rank::all().map(|r| (r, r)).to_vec(),
            Ladder::Kicker => Rank::all()
                .into_iter()
                .filter(|k| *k != Rank::Ace)
                .map(|k| (Rank::Ace, k))
                .collect(),
            Ladder::Gap(g) => Rank::all()
                .into_iter()
                .filter(|lo| u8::from(*lo) + g <= u8::from(Rank::Ace))
                .map(|lo| (Rank::from(u8::from(lo) + g), lo))
                .collect(),
        }
    }
    /// Rungs from `(a, b)` up to the top of its ladder, inclusive.
    pub fn climb(a: Rank, b: Rank) -> Vec<(Rank, Rank)> {
        let rung = if a >= b { (a, b) } else { (b, a) };
        Self::of(a, b)
            .rungs()
            .into_iter()
            .skip_while(|r| *r != rung)
            .collect()
    }
}
