/// Route table input
///
/// A route table arrives as a JSON array of `{"name": ..., "path": ...}`
/// objects in the host application's table order. How the host dumps its
/// table is its own business; only this shape matters here.

use serde::{Deserialize, Serialize};

/// A named route from the host application's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub path: String,
}

impl Route {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Parse a JSON route table, preserving its order.
pub fn parse_routes(json: &str) -> serde_json::Result<Vec<Route>> {
    serde_json::from_str(json)
}
