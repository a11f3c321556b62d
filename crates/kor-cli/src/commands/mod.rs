//! CLI command implementations.

pub mod elapsed;
pub mod export;
pub mod import;
pub mod parse;
pub mod session;
pub mod table;
pub mod util;
pub mod weekend;
