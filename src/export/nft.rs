use std::collections::BTreeSet;
use crate::matrix::{Matrix, Protocol};

const HEAD: &str = r#"#!/usr/sbin/nft -f

table inet openshift_filter {
    chain OPENSHIFT {
        type filter hook input priority 1; policy accept;

        # Allow loopback traffic
        iif lo accept

        # Allow established and related traffic
        ct state established,related accept

        # Allow ICMP on ipv4
        ip protocol icmp accept
        # Allow ICMP on ipv6
        ip6 nexthdr ipv6-icmp accept

        # Allow specific TCP and UDP ports
"#;

const TAIL: &str = r#"
        # Logging and default drop
        log prefix "firewall " drop
    }
}
"#;

pub fn render(matrix: &Matrix) -> String {
    let mut tcp = BTreeSet::new();
    let mut udp = BTreeSet::new();

    for flow in matrix {
        match flow.protocol {
            Protocol::TCP => tcp.insert(flow.port),
            Protocol::UDP => udp.insert(flow.port),
            _             => false,
        };
    }

    let mut out = String::from(HEAD);
    rule(&mut out, "tcp", &tcp);
    rule(&mut out, "udp", &udp);
    out.push_str(TAIL);
    out
}

// nft rejects an empty anonymous set, so no ports means no rule.
fn rule(out: &mut String, proto: &str, ports: &BTreeSet<u16>) {
    if ports.is_empty() {
        return;
    }

    let ports = ports.iter().map(u16::to_string).collect::<Vec<_>>().join(", ");
    out.push_str(&format!("        {} dport {{ {} }} accept\n", proto, ports));
}
