use std::fmt;
use serde::{Serialize, Deserialize};
use crate::export::column::Column;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Flow {
    pub direction: Direction,
    pub protocol:  Protocol,
    pub port:      u16,
    pub namespace: String,
    pub service:   String,
    pub pod:       String,
    pub container: String,
    pub node_role: String,
    pub optional:  bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ingress,
    Egress,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Protocol {
    TCP,
    UDP,
    Other(String),
}

// (node role, protocol, port): field order is the matrix sort order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Key<'a>(pub &'a str, pub &'a str, pub u16);

impl Flow {
    pub fn key(&self) -> Key<'_> {
        Key(&self.node_role, self.protocol.as_str(), self.port)
    }

    pub fn same(&self, other: &Flow) -> bool {
        self.key() == other.key()
    }
}

impl Protocol {
    pub fn as_str(&self) -> &str {
        match self {
            Protocol::TCP      => "TCP",
            Protocol::UDP      => "UDP",
            Protocol::Other(s) => s,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ingress
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::TCP
    }
}

impl From<String> for Protocol {
    fn from(s: String) -> Self {
        match s.as_str() {
            "TCP" => Protocol::TCP,
            "UDP" => Protocol::UDP,
            _     => Protocol::Other(s),
        }
    }
}

impl From<Protocol> for String {
    fn from(p: Protocol) -> Self {
        match p {
            Protocol::Other(s) => s,
            p                  => p.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Ingress => f.write_str("Ingress"),
            Direction::Egress  => f.write_str("Egress"),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, column) in Column::ALL.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(&column.value(self))?;
        }
        Ok(())
    }
}
