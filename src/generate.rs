use std::path::PathBuf;
use anyhow::Result;
use clap::ArgMatches;
use log::{debug, info};
use crate::Error;
use crate::args::{all, get, opt};
use crate::export::{self, Format};
use crate::matrix::Matrix;
use crate::source::{self, Deployment, Env};

#[derive(Debug)]
pub struct Config {
    pub env:        Env,
    pub deployment: Deployment,
    pub formats:    Vec<Format>,
    pub discovered: Option<PathBuf>,
    pub custom:     Option<PathBuf>,
    pub dest:       PathBuf,
    pub prefix:     String,
}

pub fn generate(args: &ArgMatches) -> Result<()> {
    let config = Config {
        env:        get(args, "env")?,
        deployment: get(args, "deployment")?,
        formats:    all(args, "format")?,
        discovered: opt(args.value_of("discovered"))?,
        custom:     opt(args.value_of("custom"))?,
        dest:       get(args, "dest")?,
        prefix:     get(args, "prefix")?,
    };

    debug!("config {:?}", config);

    let matrix = build(&config)?;
    info!("generated matrix with {} flows", matrix.len());

    for format in &config.formats {
        for path in export::write(&matrix, &config.dest, &config.prefix, *format, config.deployment)? {
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}

/// Discovered flows, then static flows, then custom flows, normalized. On a
/// shared identity the earlier source wins.
pub fn build(config: &Config) -> Result<Matrix, Error> {
    let mut flows = Vec::new();

    if let Some(path) = &config.discovered {
        flows.extend(source::load(path)?);
    }

    flows.extend(source::statics(config.env, config.deployment)?);

    if let Some(path) = &config.custom {
        flows.extend(source::load(path)?);
    }

    Ok(Matrix::new(flows).normalize())
}
