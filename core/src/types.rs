//! Event resource DTO.
//!
//! # Design
//! The event record is owned by the remote API and this crate does not
//! interpret it. `Event` is a transparent wrapper over the decoded JSON so
//! what the server sent is exactly what the caller gets back, field order
//! included.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names the API uses for the event identifier, in lookup order.
/// The mock server's `event_id` uses the same lookup.
const ID_FIELDS: [&str; 2] = ["idEvent", "id"];

/// A single event as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Value);

impl Event {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Identifier rendered as a string, if the record carries one.
    ///
    /// Numbers are rendered in their JSON form; anything else (objects,
    /// arrays, null) yields `None`.
    pub fn id(&self) -> Option<String> {
        ID_FIELDS
            .iter()
            .find_map(|field| self.0.get(*field))
            .and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Event {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
