use std::path::Path;
use log::debug;
use crate::Error;
use crate::matrix::Flow;
use super::{parse, Deployment, Env};

struct Table {
    name: &'static str,
    data: &'static str,
}

macro_rules! table {
    ($name:literal) => {
        Table {
            name: concat!("static/", $name, ".json"),
            data: include_str!(concat!("static/", $name, ".json")),
        }
    };
}

const BAREMETAL_MASTER: Table = table!("baremetal-master");
const BAREMETAL_WORKER: Table = table!("baremetal-worker");
const CLOUD_MASTER:     Table = table!("cloud-master");
const CLOUD_WORKER:     Table = table!("cloud-worker");
const GENERAL_MASTER:   Table = table!("general-master");
const GENERAL_WORKER:   Table = table!("general-worker");

/// Well-known flows that discovery cannot see, for the given environment
/// and deployment. Worker tables are only included for multi-node.
pub fn statics(env: Env, deployment: Deployment) -> Result<Vec<Flow>, Error> {
    let tables = match (env, deployment) {
        (Env::Baremetal, Deployment::SNO) => vec![BAREMETAL_MASTER, GENERAL_MASTER],
        (Env::Baremetal, Deployment::MNO) => vec![BAREMETAL_MASTER, BAREMETAL_WORKER, GENERAL_MASTER, GENERAL_WORKER],
        (Env::Cloud,     Deployment::SNO) => vec![CLOUD_MASTER, GENERAL_MASTER],
        (Env::Cloud,     Deployment::MNO) => vec![CLOUD_MASTER, CLOUD_WORKER, GENERAL_MASTER, GENERAL_WORKER],
    };

    let mut flows = Vec::new();
    for Table { name, data } in tables {
        flows.extend(parse(Path::new(name), data.as_bytes())?);
    }

    debug!("{} {} static flows: {}", env, deployment, flows.len());

    Ok(flows)
}
