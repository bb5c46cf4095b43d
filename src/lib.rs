//! Starting-hand range engine.
//!
//! A [`Range`] is a subset of the 1,326 two-card starting hands. It is
//! addressed through two grids: the 13×13 rank grid of [`RankCell`]s
//! (pairs on the diagonal, suited above, offsuit below) and, for a fixed
//! rank cell, the 4×4 suit grid of [`SuitCell`]s. The grids are only a view;
//! the canonical state is one bit per unordered [`Combo`].
//!
//! Ranges convert losslessly to and from range notation such as
//! `QQ+,AKs,72o` through the [`notation`] module.
//!
//! [`Range`]: range::Range
//! [`RankCell`]: grid::RankCell
//! [`SuitCell`]: grid::SuitCell
//! [`Combo`]: cards::Combo
pub mod cards;
#[cfg(feature = "cli")]
pub mod cli;
pub mod grid;
pub mod notation;
pub mod range;

pub use cards::*;
pub use grid::*;
pub use notation::*;
pub use range::*;

// ============================================================================
// UNIVERSE
// ============================================================================
/// Distinct ranks, Two through Ace.
pub const N_RANKS: usize = 13;
/// Distinct suits.
pub const N_SUITS: usize = 4;
/// Distinct cards in the deck.
pub const N_CARDS: usize = N_RANKS * N_SUITS;
/// Unordered two-card starting hands, C(52, 2).
pub const N_COMBOS: usize = N_CARDS * (N_CARDS - 1) / 2;
/// Cells of the 13×13 rank grid.
pub const N_RANK_CELLS: usize = N_RANKS * N_RANKS;
/// Cells of the 4×4 suit grid.
pub const N_SUIT_CELLS: usize = N_SUITS * N_SUITS;

// ============================================================================
// PRESETS
// ============================================================================
/// Ranks whose pairwise cells make up the broadway preset.
pub const BROADWAY: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
