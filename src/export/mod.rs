// Export module - topology document assembly for external renderers

pub mod json;

use crate::routes::RouteTable;
use crate::topology::classifier::Classification;
use crate::topology::{NodeRole, TopologyGraph};
use serde::Serialize;

/// The payload handed to a renderer: the annotated graph plus run metadata.
#[derive(Debug, Serialize)]
pub struct TopologyDocument {
    pub hostname: String,
    pub timestamp: String,
    pub source: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub role: NodeRole,

    /// Subnet range display string, present on Switch nodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Assemble the renderer document. Node and edge records follow graph
/// insertion order.
pub fn build_document(
    graph: &TopologyGraph,
    classification: &Classification,
    table: &RouteTable,
) -> TopologyDocument {
    let nodes = graph
        .nodes()
        .map(|node| {
            let role = classification
                .roles
                .get(&node.id)
                .copied()
                .unwrap_or(NodeRole::Pc);
            NodeRecord {
                id: node.id.clone(),
                label: node.label.clone(),
                role,
                ip_range: classification.ranges.get(&node.id).map(|r| r.to_string()),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(source, target, weight)| EdgeRecord {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        })
        .collect();

    TopologyDocument {
        hostname: get_hostname(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        source: table.source.clone(),
        nodes,
        edges,
    }
}

fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteEntry;
    use crate::topology::builder::build_topology;
    use crate::topology::classifier::classify;
    use crate::topology::hosts::attach_leaf_hosts;

    fn entry(network: &str, gateway: &str, metric: u32) -> RouteEntry {
        RouteEntry {
            network_address: network.to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            gateway: gateway.to_string(),
            interface: "eth0".to_string(),
            metric,
        }
    }

    fn table(entries: Vec<RouteEntry>) -> RouteTable {
        RouteTable {
            source: "sample.csv".to_string(),
            entries,
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_document_covers_all_nodes_including_hosts() {
        let table = table(vec![
            entry("10.0.0.0", "0.0.0.0", 1),
            entry("192.168.1.0", "10.0.0.0", 2),
        ]);
        let mut graph = build_topology(&table.entries);
        let mut classification = classify(&graph, &table.entries).unwrap();
        attach_leaf_hosts(&mut graph, &mut classification.roles);

        let document = build_document(&graph, &classification, &table);

        assert_eq!(document.source, "sample.csv");
        assert_eq!(document.nodes.len(), 4);
        assert_eq!(document.edges.len(), 3);

        let ids: Vec<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["10.0.0.0", "0.0.0.0", "192.168.1.0", "PC_1"]);

        let switch = &document.nodes[2];
        assert_eq!(switch.role, NodeRole::Switch);
        assert_eq!(switch.ip_range.as_deref(), Some("192.168.1.0 - 192.168.1.255"));

        let host_edge = &document.edges[2];
        assert_eq!(host_edge.source, "192.168.1.0");
        assert_eq!(host_edge.target, "PC_1");
        assert_eq!(host_edge.weight, None);
    }

    #[test]
    fn test_non_switch_nodes_omit_range_in_json() {
        let table = table(vec![entry("10.0.0.0", "0.0.0.0", 1)]);
        let graph = build_topology(&table.entries);
        let classification = classify(&graph, &table.entries).unwrap();
        let document = build_document(&graph, &classification, &table);

        let json = serde_json::to_value(&document).unwrap();
        let internet = &json["nodes"][1];
        assert_eq!(internet["role"], "internet");
        assert!(internet.get("ip_range").is_none());

        let edge = &json["edges"][0];
        assert_eq!(edge["weight"], 1);
    }
}
