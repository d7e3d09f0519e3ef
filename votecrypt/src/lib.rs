#[macro_use]
extern crate serde;

mod arith;
mod ballot;
mod encrypt;
mod error;
mod rng;
pub mod serde_decimal;

pub use arith::*;
pub use ballot::*;
pub use encrypt::*;
pub use error::*;
pub use rng::*;
