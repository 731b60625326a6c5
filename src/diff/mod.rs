pub use diff::{diff, report, Entry, Mark, EPHEMERAL};

mod diff;

#[cfg(test)]
mod test;
