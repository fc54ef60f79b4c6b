// Leaf host synthesis - attach one PC node to every switch

use super::{DEFAULT_ROUTE, NodeRole, TopologyGraph};
use std::collections::HashMap;

/// Attach a synthetic `PC_<n>` leaf to every Switch node.
///
/// The node list is snapshotted before mutation so freshly added hosts are
/// never revisited. The counter is 1-based and shared across the whole pass;
/// together with insertion-order iteration this makes host naming
/// reproducible for a fixed row set.
pub fn attach_leaf_hosts(graph: &mut TopologyGraph, roles: &mut HashMap<String, NodeRole>) {
    let switches: Vec<String> = graph
        .node_ids()
        .into_iter()
        .filter(|id| {
            roles.get(id.as_str()) == Some(&NodeRole::Switch) && id.as_str() != DEFAULT_ROUTE
        })
        .collect();

    let mut pc_count = 1;
    for switch in switches {
        let host_id = format!("PC_{}", pc_count);
        pc_count += 1;

        graph.ensure_node(&host_id);
        graph.upsert_edge(&switch, &host_id, None);
        roles.insert(host_id, NodeRole::Pc);
    }
}
