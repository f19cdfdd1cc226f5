//! Command implementations.

pub mod check;
pub mod resolve;
pub mod utils;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
