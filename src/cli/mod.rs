pub mod query;
pub use query::*;

pub mod session;
pub use session::*;
