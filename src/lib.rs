pub mod args;
pub mod compare;
pub mod diff;
pub mod export;
pub mod generate;
pub mod matrix;
pub mod source;

pub use error::Error;
pub use matrix::{Flow, Matrix};

mod error;
