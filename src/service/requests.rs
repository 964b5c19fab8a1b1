//! JSON request envelope and dispatch onto a [`NetworkSimulator`].

use crate::graph_store::GraphStoreError;
use crate::types::RouterName;
use super::{NetworkSimulator, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A client request, tagged by `op`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    AddRouter {
        #[serde(default)]
        name: String,
    },
    AddLink {
        source: String,
        target: String,
        #[serde(default = "default_weight")]
        weight: Value,
    },
    AddDuplexLink {
        source: String,
        target: String,
        #[serde(default = "default_weight")]
        weight: Value,
    },
    ShortestPath {
        start: String,
        end: String,
    },
    SendMessage {
        src: String,
        dest: String,
        message: String,
    },
    GetData,
}

fn default_weight() -> Value {
    Value::from(1)
}

/// Interpret a JSON weight: integers, or strings holding an integer.
/// Range checks happen in the graph store.
pub fn parse_weight(value: &Value) -> Result<i64, GraphStoreError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| GraphStoreError::InvalidWeight(value.to_string()))
}

fn error_json(error: &ServiceError) -> Value {
    let mut body = json!({
        "error": error.kind(),
        "message": error.to_string(),
    });
    if let Some(field) = error.field() {
        body["field"] = Value::from(field);
    }
    body
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| error_json(&ServiceError::Internal(format!("failed to encode response: {}", e))))
}

async fn dispatch<S: NetworkSimulator + ?Sized>(simulator: &S, request: Request) -> Result<Value, ServiceError> {
    match request {
        Request::AddRouter { name } => {
            simulator.add_router(RouterName(name)).await?;
            Ok(json!({ "ok": true, "message": "Router added successfully" }))
        }
        Request::AddLink { source, target, weight } => {
            let weight = parse_weight(&weight)?;
            simulator.add_link(RouterName(source), RouterName(target), weight).await?;
            Ok(json!({ "ok": true, "message": "Link added successfully" }))
        }
        Request::AddDuplexLink { source, target, weight } => {
            let weight = parse_weight(&weight)?;
            simulator.add_duplex_link(RouterName(source), RouterName(target), weight).await?;
            Ok(json!({ "ok": true, "message": "Duplex link added successfully" }))
        }
        Request::ShortestPath { start, end } => {
            let response = simulator.shortest_path(RouterName(start), RouterName(end)).await?;
            Ok(to_json(&response))
        }
        Request::SendMessage { src, dest, message } => {
            let response = simulator.send_message(RouterName(src), RouterName(dest), message).await?;
            Ok(to_json(&response))
        }
        Request::GetData => {
            let data = simulator.get_data().await?;
            Ok(to_json(&data))
        }
    }
}

/// Run one request; failures come back as `{"error": .., "message": ..}` objects
pub async fn handle_request<S: NetworkSimulator + ?Sized>(simulator: &S, request: Request) -> Value {
    match dispatch(simulator, request).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("request rejected: {}", e);
            error_json(&e)
        }
    }
}

/// Parse and run one JSON request line
pub async fn handle_json<S: NetworkSimulator + ?Sized>(simulator: &S, line: &str) -> Value {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(simulator, request).await,
        Err(e) => error_json(&ServiceError::BadRequest(e.to_string())),
    }
}
