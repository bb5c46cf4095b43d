//! Range Editor Binary
//!
//! Interactive editing of a starting-hand range from the terminal.

use handrange::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::CLI::run()
}
