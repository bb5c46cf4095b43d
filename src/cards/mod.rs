pub mod card;
pub use card::*;

pub mod combo;
pub use combo::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
