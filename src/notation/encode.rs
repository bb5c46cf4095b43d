use super::ladder::Ladder;
use super::token::Token;
use crate::cards::Rank;
use crate::grid::RankCell;
use crate::grid::Shape;
use crate::range::CellState;
use crate::range::Range;
use std::collections::BTreeSet;

/// Greedy cover of a range's full cells by notation tokens.
///
/// Full cells are covered by `+` ladders where a run reaches the top of its
/// ladder, then by single-cell tokens. Partially selected cells fall back to
/// one specific-combo token per selected combo.
struct Encoder<'a> {
    range: &'a Range,
    covered: BTreeSet<RankCell>,
    tokens: Vec<Token>,
}

impl<'a> Encoder<'a> {
    fn new(range: &'a Range) -> Self {
        Self {
            range,
            covered: BTreeSet::new(),
            tokens: Vec::new(),
        }
    }

    fn full(&self, cell: RankCell) -> bool {
        self.range.cell_state(cell) == CellState::All
    }

    /// The cells a rung contributes under a shape mode; `None` means both.
    fn cells(hi: Rank, lo: Rank, mode: Option<Shape>) -> Vec<RankCell> {
        match mode {
            _ if hi == lo => vec![RankCell::of(hi, lo, Shape::Pair)],
            Some(shape) => vec![RankCell::of(hi, lo, shape)],
            None => vec![
                RankCell::of(hi, lo, Shape::Suited),
                RankCell::of(hi, lo, Shape::Offsuit),
            ],
        }
    }

    /// Covers the top run of one ladder under one mode, if worthwhile.
    fn ladder(&mut self, ladder: Ladder, mode: Option<Shape>) {
        let run = ladder
            .rungs()
            .into_iter()
            .rev()
            .take_while(|(h, l)| Self::cells(*h, *l, mode).into_iter().all(|c| self.full(c)))
            .collect::<Vec<(Rank, Rank)>>();
        let fresh = run
            .iter()
            .filter(|(h, l)| {
                Self::cells(*h, *l, mode)
                    .into_iter()
                    .any(|c| !self.covered.contains(&c))
            })
            .count();
        let Some(&(hi, lo)) = run.last() else {
            return;
        };
        if run.len() < 2 || fresh < 2 {
            return;
        }
        run.iter()
            .flat_map(|(h, l)| Self::cells(*h, *l, mode))
            .for_each(|c| {
                self.covered.insert(c);
            });
        self.tokens.push(match ladder {
            Ladder::Pairs => Token::Pair {
                rank: hi,
                plus: true,
            },
            _ => Token::Hand {
                hi,
                lo,
                shape: mode,
                plus: true,
            },
        });
    }

    /// Emits every full cell no ladder covered.
    fn singles(&mut self) {
        let cells = RankCell::all()
            .filter(|c| self.full(*c) && !self.covered.contains(c))
            .collect::<Vec<RankCell>>();
        for cell in cells {
            let (hi, lo) = (cell.hi(), cell.lo());
            let token = match cell.shape() {
                Shape::Pair => Token::Pair {
                    rank: hi,
                    plus: false,
                },
                shape => {
                    let mirror = RankCell::of(hi, lo, Self::mirror(shape));
                    let both = self.full(mirror) && !self.covered.contains(&mirror);
                    match (both, shape) {
                        (true, Shape::Offsuit) => continue,
                        (true, _) => Token::Hand {
                            hi,
                            lo,
                            shape: None,
                            plus: false,
                        },
                        (false, shape) => Token::Hand {
                            hi,
                            lo,
                            shape: Some(shape),
                            plus: false,
                        },
                    }
                }
            };
            self.tokens.push(token);
        }
    }

    /// Emits loose combos of partially selected cells.
    fn partials(&mut self) {
        let combos = RankCell::all()
            .filter(|c| self.range.cell_state(*c) == CellState::Partial)
            .flat_map(|c| c.combos())
            .filter(|c| self.range.contains(*c))
            .collect::<Vec<_>>();
        self.tokens.extend(combos.into_iter().map(Token::Combo));
    }

    fn mirror(shape: Shape) -> Shape {
        match shape {
            Shape::Suited => Shape::Offsuit,
            Shape::Offsuit => Shape::Suited,
            Shape::Pair => Shape::Pair,
        }
    }

    fn encode(mut self) -> Vec<Token> {
        self.ladder(Ladder::Pairs, None);
        for ladder in Ladder::unpaired() {
            self.ladder(ladder, None);
            self.ladder(ladder, Some(Shape::Suited));
            self.ladder(ladder, Some(Shape::Offsuit));
        }
        self.singles();
        self.partials();
        self.tokens.sort_by_key(Token::order);
        self.tokens
    }
}

impl Range {
    /// The minimal-form token list denoting exactly this range,
    /// in a stable order.
    pub fn tokens(&self) -> Vec<Token> {
        Encoder::new(self).encode()
    }
}

/// notation text, e.g. QQ+,AKs,72o
impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = self
            .tokens()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", text)
    }
}
impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.to_string()
    }
}
