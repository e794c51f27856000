#[macro_use] extern crate hex_literal;

mod util;
mod crypto;

pub use util::*;
pub use crypto::*;
