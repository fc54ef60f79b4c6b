// Topology module - graph construction, node classification and host synthesis

pub mod builder;
pub mod classifier;
pub mod hosts;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::Ipv4Addr;

/// Destination of the default route, treated as the Internet edge.
pub const DEFAULT_ROUTE: &str = "0.0.0.0";

/// A node of the topology graph: an IP-address identifier plus a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: String,
    pub label: String,
}

/// Inferred role of a topology node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Internet,
    Router,
    Switch,
    Pc,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Internet => write!(f, "Internet"),
            NodeRole::Router => write!(f, "Router"),
            NodeRole::Switch => write!(f, "Switch"),
            NodeRole::Pc => write!(f, "PC"),
        }
    }
}

/// Inclusive first/last address of a subnet, computed for switch nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

/// Undirected weighted graph over IP-address identifiers.
///
/// Route edges carry `Some(metric)`; synthesized host edges carry `None`.
/// Nodes iterate in insertion order, which keeps every downstream pass
/// deterministic for a fixed row set.
#[derive(Debug, Default)]
pub struct TopologyGraph {
    graph: UnGraph<NodeInfo, Option<u32>>,
    index: HashMap<String, NodeIndex>,
}

impl TopologyGraph {
    pub fn new() -> Self {
        TopologyGraph {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Insert a node if it does not exist yet. Existing nodes keep their label.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(NodeInfo {
            id: id.to_string(),
            label: id.to_string(),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Insert an edge between two nodes, overwriting the weight if the pair
    /// is already connected (last write wins).
    pub fn upsert_edge(&mut self, a: &str, b: &str, weight: Option<u32>) {
        let a = self.ensure_node(a);
        let b = self.ensure_node(b);
        self.graph.update_edge(a, b, weight);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of edges incident to a node; zero for unknown identifiers.
    pub fn degree(&self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeInfo> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Node identifiers in insertion order.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().map(|n| n.id.clone()).collect()
    }

    /// Edges as (endpoint id, endpoint id, weight), in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Option<u32>)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
                *edge.weight(),
            )
        })
    }
}
