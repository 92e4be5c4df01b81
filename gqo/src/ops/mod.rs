//! Operations behind the commands, separated from argument handling and
//! output.

mod check;
mod compile;

pub use check::check;
pub use compile::compile;
