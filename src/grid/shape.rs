/// Shape of a rank cell, and of the combos it owns.
///
/// The three shapes partition the 13×13 grid: the diagonal holds pairs,
/// the upper triangle (row rank above column rank) holds suited hands,
/// and the lower triangle holds offsuit hands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

impl Shape {
    pub const fn all() -> [Shape; 3] {
        [Shape::Pair, Shape::Suited, Shape::Offsuit]
    }
    /// Distinct combos owned by one cell of this shape.
    pub const fn n_combos(&self) -> usize {
        match self {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }
    /// Cells of this shape in the rank grid.
    pub const fn n_cells(&self) -> usize {
        match self {
            Shape::Pair => 13,
            Shape::Suited => 78,
            Shape::Offsuit => 78,
        }
    }
    /// Notation suffix; pairs carry none.
    pub fn suffix(&self) -> &'static str {
        match self {
            Shape::Pair => "",
            Shape::Suited => "s",
            Shape::Offsuit => "o",
        }
    }
}

impl From<crate::cards::Combo> for Shape {
    fn from(combo: crate::cards::Combo) -> Self {
        match (combo.is_pair(), combo.is_suited()) {
            (true, _) => Shape::Pair,
            (false, true) => Shape::Suited,
            (false, false) => Shape::Offsuit,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Pair => write!(f, "pair"),
            Shape::Suited => write!(f, "suited"),
            Shape::Offsuit => write!(f, "offsuit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Combo;

    #[test]
    fn shapes_cover_universe() {
        let total = Shape::all()
            .iter()
            .map(|s| s.n_cells() * s.n_combos())
            .sum::<usize>();
        assert_eq!(total, crate::N_COMBOS);
    }

    #[test]
    fn combo_shapes_match_counts() {
        for shape in Shape::all() {
            let n = Combo::all().filter(|c| Shape::from(*c) == shape).count();
            assert_eq!(n, shape.n_cells() * shape.n_combos());
        }
    }
}
