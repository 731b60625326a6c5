use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::Error;
use crate::matrix::Matrix;
use crate::source::Deployment;
use super::{export, Format};

/// Writes `matrix` into `dir` as `<prefix>.<format>`. Firewall output is
/// split by role into `<prefix>-master.nft` and, for multi-node clusters,
/// `<prefix>-worker.nft`. Every payload is rendered before any file is
/// touched.
pub fn write(matrix: &Matrix, dir: &Path, prefix: &str, format: Format, deployment: Deployment) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    if format == Format::NFT {
        let (master, worker) = matrix.partition();
        files.push((format!("{}-master", prefix), export(&master, format)?));
        if deployment == Deployment::MNO {
            files.push((format!("{}-worker", prefix), export(&worker, format)?));
        }
    } else {
        files.push((prefix.to_owned(), export(matrix, format)?));
    }

    files.into_iter().map(|(name, data)| {
        let path = dir.join(format!("{}.{}", name, format.extension()));
        if let Err(e) = fs::write(&path, &data) {
            return Err(Error::Io { path, source: e });
        }
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(path)
    }).collect()
}
