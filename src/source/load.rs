use std::fs;
use std::path::Path;
use log::debug;
use crate::Error;
use crate::matrix::Flow;

/// Reads a JSON array of flows. Any unreadable, malformed or mistyped
/// entry fails the whole file.
pub fn load(path: &Path) -> Result<Vec<Flow>, Error> {
    let data  = fs::read(path).map_err(|e| Error::malformed(path, e))?;
    let flows = parse(path, &data)?;
    debug!("loaded {} flows from {}", flows.len(), path.display());
    Ok(flows)
}

pub fn parse(path: &Path, data: &[u8]) -> Result<Vec<Flow>, Error> {
    serde_json::from_slice(data).map_err(|e| Error::malformed(path, e))
}
