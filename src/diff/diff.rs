use std::fmt;
use log::debug;
use crate::export::column;
use crate::matrix::{Flow, Matrix};

// rpc.statd binds a random port on every boot.
pub const EPHEMERAL: &str = "rpc.statd";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mark {
    Added,
    Removed,
    Same,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub mark: Mark,
    pub flow: Flow,
}

/// Classifies every flow of the combined matrix: `Added` if only `a` has
/// it, `Removed` if only `b` has it, `Same` otherwise. Removed rpc.statd
/// flows are left out.
pub fn diff(a: &Matrix, b: &Matrix) -> Vec<Entry> {
    a.combine(b).into_iter().filter_map(|flow| {
        let mark = match (a.contains(&flow), b.contains(&flow)) {
            (true,  true ) => Mark::Same,
            (true,  false) => Mark::Added,
            (false, true ) if flow.service == EPHEMERAL => {
                debug!("suppressing {} from diff", flow);
                return None;
            },
            (false, true ) => Mark::Removed,
            (false, false) => return None,
        };
        Some(Entry { mark, flow })
    }).collect()
}

pub fn report(a: &Matrix, b: &Matrix) -> String {
    let mut out = column::header();
    out.push('\n');
    for entry in diff(a, b) {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mark {
            Mark::Added   => write!(f, "+ {}", self.flow),
            Mark::Removed => write!(f, "- {}", self.flow),
            Mark::Same    => write!(f, "{}", self.flow),
        }
    }
}
