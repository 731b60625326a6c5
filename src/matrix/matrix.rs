use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;
use log::trace;
use serde::{Serialize, Deserialize};
use super::Flow;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub matrix: Vec<Flow>,
}

impl Matrix {
    pub fn new(matrix: Vec<Flow>) -> Self {
        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Flow> {
        self.matrix.iter()
    }

    pub fn contains(&self, flow: &Flow) -> bool {
        self.matrix.iter().any(|f| f.same(flow))
    }

    /// Keeps the first flow seen for each (role, port, protocol).
    pub fn dedupe(self) -> Self {
        let keep = {
            let mut seen = HashSet::new();
            self.matrix.iter().map(|f| seen.insert(f.key())).collect::<Vec<_>>()
        };

        let before = self.matrix.len();
        let matrix = self.matrix.into_iter().zip(keep).filter(|(_, keep)| *keep).map(|(flow, _)| {
            flow
        }).collect::<Vec<_>>();

        trace!("dedupe dropped {} of {} flows", before - matrix.len(), before);

        Self { matrix }
    }

    pub fn sort(mut self) -> Self {
        self.matrix.sort_by(|a, b| a.key().cmp(&b.key()));
        self
    }

    pub fn normalize(self) -> Self {
        self.dedupe().sort()
    }

    /// Sorted union of both matrices; on a shared identity the flow from
    /// `self` is kept.
    pub fn combine(&self, other: &Matrix) -> Matrix {
        self.iter().chain(other.iter()).cloned().collect::<Matrix>().normalize()
    }

    /// Flows of `self` with no identity match in `other`, in input order.
    pub fn difference(&self, other: &Matrix) -> Matrix {
        self.iter().filter(|f| !other.contains(f)).cloned().collect()
    }
}

impl FromIterator<Flow> for Matrix {
    fn from_iter<I: IntoIterator<Item = Flow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Flow>> for Matrix {
    fn from(matrix: Vec<Flow>) -> Self {
        Self::new(matrix)
    }
}

impl IntoIterator for Matrix {
    type Item     = Flow;
    type IntoIter = vec::IntoIter<Flow>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrix.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item     = &'a Flow;
    type IntoIter = slice::Iter<'a, Flow>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrix.iter()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for flow in &self.matrix {
            writeln!(f, "{}", flow)?;
        }
        Ok(())
    }
}
