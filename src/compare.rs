use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::Result;
use clap::ArgMatches;
use log::{debug, info};
use crate::Error;
use crate::args::{get, opt};
use crate::diff;
use crate::matrix::Matrix;
use crate::source;

pub fn compare(args: &ArgMatches) -> Result<()> {
    let a: PathBuf = get(args, "a")?;
    let b: PathBuf = get(args, "b")?;
    let output: Option<PathBuf> = opt(args.value_of("output"))?;

    let a = Matrix::new(source::load(&a)?).normalize();
    let b = Matrix::new(source::load(&b)?).normalize();
    debug!("comparing {} flows with {} flows", a.len(), b.len());

    let report = diff::report(&a, &b);

    match output {
        Some(path) => {
            fs::write(&path, &report).map_err(|e| Error::Io { path: path.clone(), source: e })?;
            info!("wrote diff to {}", path.display());
        },
        None => io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}
