use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Read-only, insertion-ordered event store.
pub type Db = Arc<Vec<Value>>;

pub fn app() -> Router {
    app_with(seed_events())
}

pub fn app_with(events: Vec<Value>) -> Router {
    let db: Db = Arc::new(events);
    Router::new()
        .route("/api/v1/events", get(list_events))
        .route("/api/v1/events/{id}", get(get_event))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, events: Vec<Value>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(events)).await
}

/// Events served by the binary when no fixture is supplied.
pub fn seed_events() -> Vec<Value> {
    vec![
        json!({"idEvent": "1", "name": "Launch", "venue": "Main hall"}),
        json!({"idEvent": "2", "name": "Workshop", "venue": "Room 4"}),
        json!({"idEvent": "3", "name": "Closing party", "venue": "Rooftop"}),
    ]
}

/// Identifier of a stored event: `idEvent`, falling back to `id`.
///
/// Must resolve ids the same way as `events_core::Event::id`.
pub fn event_id(event: &Value) -> Option<String> {
    ["idEvent", "id"]
        .iter()
        .find_map(|field| event.get(*field))
        .and_then(|id| match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

async fn list_events(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.as_ref().clone())
}

async fn get_event(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    db.iter()
        .find(|event| event_id(event).as_deref() == Some(id.as_str()))
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            debug!(%id, "event not found");
            (StatusCode::NOT_FOUND, Json(json!({"error": "event not found"})))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_events_have_unique_ids() {
        let mut ids: Vec<String> = seed_events().iter().filter_map(event_id).collect();
        assert_eq!(ids.len(), 3);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn event_id_falls_back_to_id_field() {
        assert_eq!(event_id(&json!({"id": 9})).as_deref(), Some("9"));
        assert_eq!(event_id(&json!({"idEvent": "a", "id": "b"})).as_deref(), Some("a"));
        assert_eq!(event_id(&json!({"name": "nameless"})), None);
    }
}
