use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Select every combo", alias = "a")]
    All {
        #[arg(long)]
        off: bool,
    },
    #[command(about = "Select every pocket pair", alias = "p")]
    Pairs {
        #[arg(long)]
        off: bool,
    },
    #[command(about = "Select every hand made of T, J, Q, K, A", alias = "b")]
    Broadway {
        #[arg(long)]
        off: bool,
    },
    #[command(about = "Deselect everything", alias = "c")]
    Clear,
    #[command(about = "Toggle a whole rank cell, e.g. AKs or 1")]
    Cell {
        #[arg(required = true)]
        cell: String,
        #[arg(long)]
        off: bool,
    },
    #[command(about = "Toggle one suit cell of a rank cell, e.g. AKo hs")]
    Suit {
        #[arg(required = true)]
        cell: String,
        #[arg(required = true)]
        suit: String,
        #[arg(long)]
        off: bool,
    },
    #[command(about = "Union range notation into the range, e.g. QQ+,AKs")]
    Add {
        #[arg(required = true, num_args = 1..)]
        notation: Vec<String>,
    },
    #[command(about = "Replace the range with parsed notation")]
    Set {
        #[arg(required = true, num_args = 1..)]
        notation: Vec<String>,
    },
    #[command(about = "Print the rank matrix, notation, and combo count", alias = "s")]
    Show,
    #[command(about = "Print the suit matrix of one rank cell")]
    Suits {
        #[arg(required = true)]
        cell: String,
    },
}

/// Startup options for the range binary.
#[derive(Parser)]
#[command(author, version, about = "Interactive starting-hand range editor", long_about = None)]
pub struct Args {
    /// Initial range notation.
    #[arg(long, short, default_value = "")]
    pub range: String,
    /// Skip matrix rendering after each command.
    #[arg(long, short)]
    pub quiet: bool,
}
