use std::fmt;
use std::str::FromStr;
use crate::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Env {
    Baremetal,
    Cloud,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Deployment {
    SNO,
    MNO,
}

impl FromStr for Env {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baremetal" => Ok(Env::Baremetal),
            "cloud"     => Ok(Env::Cloud),
            _           => Err(Error::validation("cluster environment", s)),
        }
    }
}

impl FromStr for Deployment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sno" => Ok(Deployment::SNO),
            "mno" => Ok(Deployment::MNO),
            _     => Err(Error::validation("deployment type", s)),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Env::Baremetal => f.write_str("baremetal"),
            Env::Cloud     => f.write_str("cloud"),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Deployment::SNO => f.write_str("sno"),
            Deployment::MNO => f.write_str("mno"),
        }
    }
}

pub use load::{load, parse};
pub use table::statics;

mod load;
mod table;

#[cfg(test)]
mod test;
