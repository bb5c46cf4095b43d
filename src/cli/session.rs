//! Interactive CLI over a single range.
//!
//! Reads one command per line, applies it, and echoes the resulting
//! notation. The range is owned by the session; nothing else mutates it.
use super::query::Args;
use super::query::Query;
use crate::grid::Address;
use crate::grid::RankCell;
use crate::grid::SuitCell;
use crate::range::CellState;
use crate::range::Range;
use crate::range::SuitState;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

pub struct CLI {
    range: Range,
    quiet: bool,
}

impl TryFrom<Args> for CLI {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> anyhow::Result<Self> {
        Ok(Self {
            range: Range::try_from(args.range.as_str())?,
            quiet: args.quiet,
        })
    }
}

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let mut cli = Self::try_from(Args::parse())?;
        log::info!("{:<32}{}", "starting range", cli.range);
        cli.show();
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush()?;
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match cli.handle(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        log::info!("{:<32}{}", "final range", cli.range);
        Ok(())
    }

    fn handle(&mut self, input: &str) -> anyhow::Result<()> {
        let query = Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))?;
        match query {
            Query::All { off } => self.range.set_all(!off),
            Query::Pairs { off } => self.range.set_pairs(!off),
            Query::Broadway { off } => self.range.set_broadway(!off),
            Query::Clear => self.range.clear(),
            Query::Cell { cell, off } => {
                let cell = RankCell::try_from(cell.as_str()).map_err(anyhow::Error::msg)?;
                self.range.set_rank_cell(cell, !off);
            }
            Query::Suit { cell, suit, off } => {
                let cell = RankCell::try_from(cell.as_str()).map_err(anyhow::Error::msg)?;
                let suit = SuitCell::try_from(suit.as_str()).map_err(anyhow::Error::msg)?;
                self.range.set_suit_cell(cell, suit, !off)?;
            }
            Query::Add { notation } => self.range.absorb(&notation.join(","))?,
            Query::Set { notation } => self.range = Range::try_from(notation.join(",").as_str())?,
            Query::Show => return Ok(self.matrix()),
            Query::Suits { cell } => {
                let cell = RankCell::try_from(cell.as_str()).map_err(anyhow::Error::msg)?;
                return Ok(self.suits(cell));
            }
        }
        log::debug!("{:<32}{}", "applied", input.trim());
        Ok(self.show())
    }

    fn show(&self) {
        match self.quiet {
            true => println!("{}", self.range),
            false => self.matrix(),
        }
    }

    fn matrix(&self) {
        let states = self.range.cell_states();
        for (r, row) in states.chunks(crate::N_RANKS).enumerate() {
            let line = row
                .iter()
                .enumerate()
                .map(|(c, state)| {
                    let cell = RankCell::from((r * crate::N_RANKS + c) as u8);
                    let label = format!("{:<4}", cell.label());
                    match state {
                        CellState::All => label.green().bold().to_string(),
                        CellState::Partial => label.yellow().to_string(),
                        CellState::None => label.dimmed().to_string(),
                    }
                })
                .collect::<Vec<String>>()
                .join("");
            println!("{}", line);
        }
        println!("{}", self.range);
        println!(
            "{}/{} combos selected ({:.3}%)",
            self.range.combo_count().to_string().green(),
            crate::N_COMBOS,
            self.range.percentage()
        );
    }

    fn suits(&self, cell: RankCell) {
        let states = self.range.suit_cell_states(cell);
        for (r, row) in states.chunks(crate::N_SUITS).enumerate() {
            let line = row
                .iter()
                .enumerate()
                .map(|(c, state)| {
                    let suit = SuitCell::from((r * crate::N_SUITS + c) as u8);
                    let label = format!("{:<6}", Address::from((cell, suit)).to_string());
                    match state {
                        SuitState::Active => label.green().bold().to_string(),
                        SuitState::Inactive => label.normal().to_string(),
                        SuitState::Invalid => format!("{:<6}", "--").dimmed().to_string(),
                    }
                })
                .collect::<Vec<String>>()
                .join("");
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CLI {
        CLI {
            range: Range::empty(),
            quiet: true,
        }
    }

    #[test]
    fn add_joins_arguments_as_tokens() {
        let mut cli = session();
        cli.handle("add QQ+ AKs").unwrap();
        assert_eq!(cli.range, Range::try_from("QQ+,AKs").unwrap());
        cli.handle("add 72o").unwrap();
        assert_eq!(cli.range, Range::try_from("QQ+,AKs,72o").unwrap());
    }

    #[test]
    fn set_replaces_range() {
        let mut cli = session();
        cli.handle("add 22+").unwrap();
        cli.handle("set AK QQ").unwrap();
        assert_eq!(cli.range, Range::try_from("AK,QQ").unwrap());
    }

    #[test]
    fn bad_notation_leaves_range() {
        let mut cli = session();
        cli.handle("add QQ+").unwrap();
        assert!(cli.handle("add AKs 7X").is_err());
        assert_eq!(cli.range, Range::try_from("QQ+").unwrap());
    }

    #[test]
    fn cell_and_suit_toggles() {
        let mut cli = session();
        cli.handle("cell AKs").unwrap();
        assert_eq!(cli.range.combo_count(), 4);
        cli.handle("suit AKs ss --off").unwrap();
        assert_eq!(cli.range.combo_count(), 3);
        assert!(cli.handle("suit AKs sh").is_err());
    }
}
