pub mod flow;
pub mod role;

pub use flow::{Direction, Flow, Key, Protocol};
pub use matrix::Matrix;
pub use role::{resolve, MASTER, ROLE_LABEL, WORKER};

mod matrix;
