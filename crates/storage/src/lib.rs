#![warn(clippy::pedantic)]

mod seed;
mod store;

pub use seed::*;
pub use store::*;
