// Routes module - routing table rows and CSV ingestion

pub mod parser;

use serde::{Deserialize, Serialize};

/// One row of the static routing table.
///
/// Field renames bind the five CSV column headers exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(rename = "Network address")]
    pub network_address: String,

    #[serde(rename = "Subnet mask")]
    pub subnet_mask: String,

    #[serde(rename = "Gateway")]
    pub gateway: String,

    #[serde(rename = "Interface")]
    pub interface: String,

    #[serde(rename = "Metric")]
    pub metric: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTable {
    pub source: String,
    pub entries: Vec<RouteEntry>,
    pub timestamp: String,
}
