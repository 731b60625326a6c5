use std::borrow::Cow;
use crate::matrix::Flow;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Column {
    Direction,
    Protocol,
    Port,
    Namespace,
    Service,
    Pod,
    Container,
    NodeRole,
    Optional,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Direction,
        Column::Protocol,
        Column::Port,
        Column::Namespace,
        Column::Service,
        Column::Pod,
        Column::Container,
        Column::NodeRole,
        Column::Optional,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Direction => "Direction",
            Column::Protocol  => "Protocol",
            Column::Port      => "Port",
            Column::Namespace => "Namespace",
            Column::Service   => "Service",
            Column::Pod       => "Pod",
            Column::Container => "Container",
            Column::NodeRole  => "Node Role",
            Column::Optional  => "Optional",
        }
    }

    pub fn field(self) -> &'static str {
        match self {
            Column::Direction => "direction",
            Column::Protocol  => "protocol",
            Column::Port      => "port",
            Column::Namespace => "namespace",
            Column::Service   => "service",
            Column::Pod       => "pod",
            Column::Container => "container",
            Column::NodeRole  => "nodeRole",
            Column::Optional  => "optional",
        }
    }

    pub fn value(self, flow: &Flow) -> Cow<'_, str> {
        match self {
            Column::Direction => Cow::Owned(flow.direction.to_string()),
            Column::Protocol  => Cow::Borrowed(flow.protocol.as_str()),
            Column::Port      => Cow::Owned(flow.port.to_string()),
            Column::Namespace => Cow::Borrowed(&flow.namespace),
            Column::Service   => Cow::Borrowed(&flow.service),
            Column::Pod       => Cow::Borrowed(&flow.pod),
            Column::Container => Cow::Borrowed(&flow.container),
            Column::NodeRole  => Cow::Borrowed(&flow.node_role),
            Column::Optional  => Cow::Owned(flow.optional.to_string()),
        }
    }
}

pub fn header() -> String {
    Column::ALL.iter().map(|c| c.header()).collect::<Vec<_>>().join(",")
}
