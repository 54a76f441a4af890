//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, MAX_WORD_LENGTH};
pub use env::Config;
