// Topology builder - routing rows to an undirected weighted graph

use super::TopologyGraph;
use crate::routes::RouteEntry;

/// Build the topology graph from routing table rows.
///
/// Every row contributes its network address and gateway as nodes and one
/// edge between them weighted by the route metric. Repeated pairs keep the
/// metric of the row processed last.
pub fn build_topology(entries: &[RouteEntry]) -> TopologyGraph {
    let mut graph = TopologyGraph::new();

    for entry in entries {
        graph.ensure_node(&entry.network_address);
        graph.ensure_node(&entry.gateway);
        graph.upsert_edge(&entry.network_address, &entry.gateway, Some(entry.metric));
    }

    graph
}
