use std::fmt;
use std::str::FromStr;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use crate::Error;
use crate::matrix::Matrix;
use self::column::Column;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    CSV,
    JSON,
    YAML,
    NFT,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::CSV  => "csv",
            Format::JSON => "json",
            Format::YAML => "yaml",
            Format::NFT  => "nft",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv"                  => Ok(Format::CSV),
            "json"                 => Ok(Format::JSON),
            "yaml"                 => Ok(Format::YAML),
            "nft" | "nft-firewall" => Ok(Format::NFT),
            _                      => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn export(matrix: &Matrix, format: Format) -> Result<Vec<u8>, Error> {
    match format {
        Format::CSV  => to_csv(matrix),
        Format::JSON => to_json(matrix),
        Format::YAML => to_yaml(matrix),
        Format::NFT  => Ok(nft::render(matrix).into_bytes()),
    }
}

pub fn to_csv(matrix: &Matrix) -> Result<Vec<u8>, Error> {
    let mut w = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let encode = |e: csv::Error| Error::encode("csv", e);

    w.write_record(Column::ALL.iter().map(|c| c.header())).map_err(encode)?;

    for flow in matrix {
        let row = Column::ALL.iter().map(|c| c.value(flow)).collect::<Vec<_>>();
        w.write_record(row.iter().map(|v| v.as_bytes())).map_err(encode)?;
    }

    w.into_inner().map_err(|e| Error::encode("csv", e.error()))
}

pub fn to_json(matrix: &Matrix) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let format  = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut out, format);
    matrix.matrix.serialize(&mut ser).map_err(|e| Error::encode("json", e))?;
    Ok(out)
}

pub fn to_yaml(matrix: &Matrix) -> Result<Vec<u8>, Error> {
    match serde_yaml::to_string(matrix) {
        Ok(s)  => Ok(s.into_bytes()),
        Err(e) => Err(Error::encode("yaml", e)),
    }
}

pub use write::write;

pub mod column;
pub mod nft;

mod write;
