// Role classifier - infer Internet/Router/Switch/PC roles from the graph

use super::{DEFAULT_ROUTE, IpRange, NodeRole, TopologyGraph};
use crate::error::{AppError, AppResult};
use crate::routes::RouteEntry;
use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;

/// Role and range maps produced by a classification pass.
#[derive(Debug, Clone)]
pub struct Classification {
    pub roles: HashMap<String, NodeRole>,
    pub ranges: HashMap<String, IpRange>,
}

/// Assign a role to every node of the graph.
///
/// A network address that is not itself a gateway and is connected to the
/// graph gets a subnet range and becomes a Switch candidate. Roles are then
/// assigned by strict precedence: the default-route sentinel is the Internet
/// edge, gateways are Routers, range holders are Switches, everything else
/// is a PC. A gateway with a connected subnet is a Router, never a Switch.
pub fn classify(graph: &TopologyGraph, entries: &[RouteEntry]) -> AppResult<Classification> {
    let gateways: HashSet<&str> = entries.iter().map(|e| e.gateway.as_str()).collect();

    let mut ranges = HashMap::new();
    for entry in entries {
        if !gateways.contains(entry.network_address.as_str())
            && graph.degree(&entry.network_address) > 0
        {
            let range = subnet_range(&entry.network_address, &entry.subnet_mask)?;
            ranges.insert(entry.network_address.clone(), range);
        }
    }

    let mut roles = HashMap::new();
    for node in graph.nodes() {
        let role = if node.id == DEFAULT_ROUTE {
            NodeRole::Internet
        } else if gateways.contains(node.id.as_str()) {
            NodeRole::Router
        } else if ranges.contains_key(&node.id) {
            NodeRole::Switch
        } else {
            NodeRole::Pc
        };
        roles.insert(node.id.clone(), role);
    }

    Ok(Classification { roles, ranges })
}

/// Compute the inclusive first/last address of a subnet from a dotted-quad
/// address and mask.
fn subnet_range(address: &str, mask: &str) -> AppResult<IpRange> {
    let address = parse_ipv4(address)?;
    let mask_bits = u32::from(parse_ipv4(mask)?);

    // A valid mask is a run of ones followed by zeros
    if mask_bits.count_ones() != mask_bits.leading_ones() {
        return Err(AppError::InvalidAddress(format!(
            "non-contiguous subnet mask: {}",
            mask
        )));
    }

    let first = u32::from(address) & mask_bits;
    let last = first | !mask_bits;

    Ok(IpRange {
        first: Ipv4Addr::from(first),
        last: Ipv4Addr::from(last),
    })
}

fn parse_ipv4(s: &str) -> AppResult<Ipv4Addr> {
    s.parse()
        .map_err(|_| AppError::InvalidAddress(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builder::build_topology;

    fn entry(network: &str, mask: &str, gateway: &str, metric: u32) -> RouteEntry {
        RouteEntry {
            network_address: network.to_string(),
            subnet_mask: mask.to_string(),
            gateway: gateway.to_string(),
            interface: "eth0".to_string(),
            metric,
        }
    }

    #[test]
    fn test_subnet_range_slash_24() {
        let range = subnet_range("192.168.1.0", "255.255.255.0").unwrap();
        assert_eq!(range.first, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(range.last, Ipv4Addr::new(192, 168, 1, 255));
    }

    #[test]
    fn test_subnet_range_normalizes_host_bits() {
        let range = subnet_range("10.1.2.77", "255.255.255.192").unwrap();
        assert_eq!(range.first, Ipv4Addr::new(10, 1, 2, 64));
        assert_eq!(range.last, Ipv4Addr::new(10, 1, 2, 127));
    }

    #[test]
    fn test_subnet_range_slash_32() {
        let range = subnet_range("10.0.0.1", "255.255.255.255").unwrap();
        assert_eq!(range.first, range.last);
    }

    #[test]
    fn test_non_contiguous_mask_is_rejected() {
        let err = subnet_range("10.0.0.0", "255.0.255.0").unwrap_err();
        assert!(matches!(err, AppError::InvalidAddress(_)));
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        assert!(subnet_range("10.0.0", "255.255.255.0").is_err());
        assert!(subnet_range("10.0.0.0", "not-a-mask").is_err());
    }

    #[test]
    fn test_roles_for_sample_table() {
        let entries = vec![
            entry("10.0.0.0", "255.255.255.0", "0.0.0.0", 1),
            entry("192.168.1.0", "255.255.255.0", "10.0.0.0", 2),
        ];
        let graph = build_topology(&entries);
        let classification = classify(&graph, &entries).unwrap();

        assert_eq!(classification.roles["0.0.0.0"], NodeRole::Internet);
        assert_eq!(classification.roles["10.0.0.0"], NodeRole::Router);
        assert_eq!(classification.roles["192.168.1.0"], NodeRole::Switch);

        let range = classification.ranges["192.168.1.0"];
        assert_eq!(range.to_string(), "192.168.1.0 - 192.168.1.255");
        assert!(!classification.ranges.contains_key("10.0.0.0"));
    }

    #[test]
    fn test_gateway_with_subnet_is_a_router() {
        // 10.0.0.0 appears both as a network address and as a gateway
        let entries = vec![
            entry("10.0.0.0", "255.255.255.0", "172.16.0.1", 1),
            entry("192.168.1.0", "255.255.255.0", "10.0.0.0", 2),
        ];
        let graph = build_topology(&entries);
        let classification = classify(&graph, &entries).unwrap();

        assert_eq!(classification.roles["10.0.0.0"], NodeRole::Router);
        assert!(!classification.ranges.contains_key("10.0.0.0"));
    }

    #[test]
    fn test_default_route_sentinel_beats_gateway_membership() {
        // 0.0.0.0 is a gateway here, but the sentinel check wins
        let entries = vec![entry("10.0.0.0", "255.255.255.0", "0.0.0.0", 1)];
        let graph = build_topology(&entries);
        let classification = classify(&graph, &entries).unwrap();

        assert_eq!(classification.roles["0.0.0.0"], NodeRole::Internet);
    }

    #[test]
    fn test_isolated_network_address_gets_no_range() {
        let entries = vec![entry("10.0.0.0", "255.255.255.0", "0.0.0.0", 1)];
        let mut graph = build_topology(&entries);
        // Declared network with no edges: no range, falls through to PC
        graph.ensure_node("172.16.0.0");

        let mut with_isolated = entries.clone();
        with_isolated.push(entry("172.16.0.0", "255.255.0.0", "10.99.99.99", 1));
        let classification = classify(&graph, &with_isolated).unwrap();

        assert!(!classification.ranges.contains_key("172.16.0.0"));
        assert_eq!(classification.roles["172.16.0.0"], NodeRole::Pc);
    }

    #[test]
    fn test_every_node_gets_exactly_one_role() {
        let entries = vec![
            entry("10.0.0.0", "255.255.255.0", "0.0.0.0", 1),
            entry("192.168.1.0", "255.255.255.0", "10.0.0.0", 2),
            entry("192.168.2.0", "255.255.255.0", "10.0.0.0", 4),
        ];
        let graph = build_topology(&entries);
        let classification = classify(&graph, &entries).unwrap();

        assert_eq!(classification.roles.len(), graph.node_count());
        for id in graph.node_ids() {
            assert!(classification.roles.contains_key(&id));
        }
    }

    #[test]
    fn test_invalid_mask_aborts_classification() {
        let entries = vec![
            entry("10.0.0.0", "255.255.255.0", "0.0.0.0", 1),
            entry("192.168.1.0", "255.0.255.0", "10.0.0.0", 2),
        ];
        let graph = build_topology(&entries);
        assert!(classify(&graph, &entries).is_err());
    }
}
