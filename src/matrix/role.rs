use std::collections::HashMap;
use log::debug;
use crate::Error;
use super::Matrix;

pub const ROLE_LABEL: &str = "node-role.kubernetes.io/";

pub const MASTER: &str = "master";
pub const WORKER: &str = "worker";

impl Matrix {
    /// Splits into (master, worker) matrices. Flows with any other role are
    /// dropped from both.
    pub fn partition(&self) -> (Matrix, Matrix) {
        let mut master = Matrix::default();
        let mut worker = Matrix::default();

        for flow in self {
            match flow.node_role.as_str() {
                MASTER => master.matrix.push(flow.clone()),
                WORKER => worker.matrix.push(flow.clone()),
                role   => debug!("dropping {} flow {} from partition", role, flow),
            }
        }

        (master, worker)
    }
}

/// Resolves the role of `node` from its labels. Well-known roles win; after
/// that the first `prefix` label in the map's iteration order is used, so a
/// node carrying several custom role labels resolves to an arbitrary one.
pub fn resolve(node: &str, labels: &HashMap<String, String>, prefix: &str) -> Result<String, Error> {
    let has = |role: &str| labels.contains_key(&format!("{}{}", prefix, role));

    if has(MASTER) || has("control-plane") {
        return Ok(MASTER.to_owned());
    }

    if has(WORKER) {
        return Ok(WORKER.to_owned());
    }

    labels.keys().find_map(|label| {
        label.strip_prefix(prefix).map(str::to_owned)
    }).ok_or_else(|| Error::RoleNotFound(node.to_owned()))
}
