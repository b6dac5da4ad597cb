//! This module defines the messages exchanged with the word service and the CAN store.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WORD_URL: &str = "https://random-word-api.herokuapp.com/word";
pub const DEFAULT_STORE_URL: &str = "http://localhost:3000/data";
pub const DEFAULT_JOIN: &str = "localhost:3000";

pub const DEFAULT_DATA_COUNT: usize = 100;
pub const DEFAULT_NODE_COUNT: usize = 10;
pub const DEFAULT_BASE_PORT: u16 = 3001;

/// Body of a `PUT /data` against a CAN node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub key: String,
    pub data: String,
}

/// One CAN node to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub port: u16,
    pub join: String,
    pub key: String,
}

#[derive(Serialize, Debug)]
pub struct DataReport {
    pub requested: usize,
    pub stored: Vec<DataRequest>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LaunchedNode {
    pub port: u16,
    pub key: String,
    pub pid: Option<u32>,
}

#[derive(Serialize, Debug)]
pub struct ServerReport {
    pub nodes: Vec<LaunchedNode>,
    /// False when the populator returned without waiting on the nodes.
    pub waited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_request_wire_format() {
        let req = DataRequest {
            key: "a".into(),
            data: "x".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"key":"a","data":"x"}"#);
    }
}
