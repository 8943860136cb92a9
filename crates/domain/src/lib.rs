#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod draft;
mod exercise;
mod name;
mod progress;
mod set;
mod workout;

pub use draft::*;
pub use exercise::*;
pub use name::*;
pub use progress::*;
pub use set::*;
pub use workout::*;
