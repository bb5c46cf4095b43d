/// Selection state of a whole rank cell.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// No combo of the cell is selected.
    None,
    /// Some, but not all, combos of the cell are selected.
    Partial,
    /// Every combo of the cell is selected.
    All,
}

impl CellState {
    /// Classifies `n` selected combos out of `of`.
    pub fn from_counts(n: usize, of: usize) -> Self {
        debug_assert!(n <= of);
        match n {
            0 => CellState::None,
            n if n == of => CellState::All,
            _ => CellState::Partial,
        }
    }
}

/// Selection state of one suit address under a rank cell.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum SuitState {
    /// The address names no combo of the rank cell.
    Invalid,
    Inactive,
    Active,
}

impl From<bool> for SuitState {
    fn from(active: bool) -> Self {
        match active {
            true => SuitState::Active,
            false => SuitState::Inactive,
        }
    }
}
