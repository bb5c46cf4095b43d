use super::state::CellState;
use super::state::SuitState;
use crate::Arbitrary;
use crate::cards::Combo;
use crate::grid::Address;
use crate::grid::InvalidCellError;
use crate::grid::RankCell;
use crate::grid::Shape;
use crate::grid::SuitCell;

const WORDS: usize = crate::N_COMBOS.div_ceil(64);

/// A set of selected starting hands.
///
/// One bit per [`Combo`], indexed by the combo's dense `u16` index. The rank
/// and suit grids are views over this set through [`Address`]; toggling any
/// alias of a combo toggles the same bit. Bits above 1,326 are always zero.
///
/// With the `client` feature the range serializes as its notation string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(try_from = "String", into = "String"))]
pub struct Range([u64; WORDS]);

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

impl Range {
    pub const fn empty() -> Self {
        Self([0; WORDS])
    }
    pub fn full() -> Self {
        !Self::empty()
    }

    pub fn contains(&self, combo: Combo) -> bool {
        let (word, bit) = Self::locate(combo);
        self.0[word] & bit != 0
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }
    /// Selected combos in index order.
    pub fn combos(&self) -> impl Iterator<Item = Combo> + '_ {
        Combo::all().filter(|c| self.contains(*c))
    }

    /// Number of selected combos, 0 through 1,326.
    pub fn combo_count(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }
    /// Selected share of the universe, in percent.
    pub fn percentage(&self) -> f32 {
        self.combo_count() as f32 * 100. / crate::N_COMBOS as f32
    }
    /// Tri-state summary of one rank cell.
    pub fn cell_state(&self, cell: RankCell) -> CellState {
        CellState::from_counts(
            cell.combos().filter(|c| self.contains(*c)).count(),
            cell.shape().n_combos(),
        )
    }
    /// Tri-state summary of every rank cell, in grid order.
    pub fn cell_states(&self) -> [CellState; crate::N_RANK_CELLS] {
        let mut states = [CellState::None; crate::N_RANK_CELLS];
        for cell in RankCell::all() {
            states[usize::from(cell)] = self.cell_state(cell);
        }
        states
    }
    /// Per-address detail of one rank cell, in suit-grid order.
    pub fn suit_cell_states(&self, cell: RankCell) -> [SuitState; crate::N_SUIT_CELLS] {
        let mut states = [SuitState::Invalid; crate::N_SUIT_CELLS];
        for suit in SuitCell::all() {
            if let Ok(combo) = Address::from((cell, suit)).combo() {
                states[u8::from(suit) as usize] = SuitState::from(self.contains(combo));
            }
        }
        states
    }

    /// Selects or deselects one combo. Idempotent.
    pub fn set_combo(&mut self, combo: Combo, active: bool) {
        let (word, bit) = Self::locate(combo);
        match active {
            true => self.0[word] |= bit,
            false => self.0[word] &= !bit,
        }
    }
    /// Selects or deselects every combo the rank cell owns.
    pub fn set_rank_cell(&mut self, cell: RankCell, active: bool) {
        log::trace!("{:<32}{:<8}{}", "set rank cell", cell, active);
        cell.combos().for_each(|c| self.set_combo(c, active));
    }
    /// Selects or deselects the one combo at a suit address.
    /// Invalid addresses are rejected without touching the range.
    pub fn set_suit_cell(
        &mut self,
        cell: RankCell,
        suit: SuitCell,
        active: bool,
    ) -> Result<(), InvalidCellError> {
        let combo = Address::from((cell, suit)).combo()?;
        log::trace!("{:<32}{:<8}{}", "set suit cell", combo, active);
        self.set_combo(combo, active);
        Ok(())
    }
    pub fn set_all(&mut self, active: bool) {
        log::debug!("{:<32}{}", "set all", active);
        *self = match active {
            true => Self::full(),
            false => Self::empty(),
        };
    }
    /// Sets every pocket pair, leaving other cells as they are.
    pub fn set_pairs(&mut self, active: bool) {
        log::debug!("{:<32}{}", "set pairs", active);
        RankCell::shaped(Shape::Pair).for_each(|c| self.set_rank_cell(c, active));
    }
    /// Sets every cell made only of broadway ranks, leaving others as they are.
    pub fn set_broadway(&mut self, active: bool) {
        log::debug!("{:<32}{}", "set broadway", active);
        RankCell::all()
            .filter(|c| crate::BROADWAY.contains(&c.hi()))
            .filter(|c| crate::BROADWAY.contains(&c.lo()))
            .for_each(|c| self.set_rank_cell(c, active));
    }
    pub fn clear(&mut self) {
        self.set_all(false);
    }

    fn locate(combo: Combo) -> (usize, u64) {
        let i = u16::from(combo) as usize;
        (i / 64, 1 << (i % 64))
    }
    fn trim(mut self) -> Self {
        let tail = crate::N_COMBOS % 64;
        if tail != 0 {
            self.0[WORDS - 1] &= (1 << tail) - 1;
        }
        self
    }
}

impl std::ops::Not for Range {
    type Output = Self;
    fn not(self) -> Self {
        Self(self.0.map(|w| !w)).trim()
    }
}
impl std::ops::BitOr for Range {
    type Output = Self;
    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}
impl std::ops::BitOrAssign for Range {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a |= b);
    }
}
impl std::ops::BitAnd for Range {
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self {
        self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a &= b);
        self
    }
}
impl std::ops::Sub for Range {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a &= !b);
        self
    }
}

impl FromIterator<Combo> for Range {
    fn from_iter<I: IntoIterator<Item = Combo>>(iter: I) -> Self {
        let mut range = Self::empty();
        iter.into_iter().for_each(|c| range.set_combo(c, true));
        range
    }
}

/// a few whole cells, plus a few loose combos so that partial cells show up
impl Arbitrary for Range {
    fn random() -> Self {
        let mut range = Self::empty();
        for cell in RankCell::all() {
            if rand::random_bool(0.3) {
                range.set_rank_cell(cell, true);
            }
        }
        for _ in 0..rand::random_range(0..16) {
            range.set_combo(Combo::random(), rand::random());
        }
        range
    }
}
