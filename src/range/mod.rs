pub mod range;
pub use range::*;

pub mod state;
pub use state::*;
