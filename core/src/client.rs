//! Stateless HTTP request builder and response parser for the events API.
//!
//! # Design
//! `EventClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The I/O in between belongs to a `Transport`, keeping this layer
//! deterministic.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Event;

/// Collection path of the events resource, relative to the base URL.
pub const EVENTS_PATH: &str = "/api/v1/events";

/// Synchronous, stateless request builder for the events API.
#[derive(Debug, Clone)]
pub struct EventClient {
    base_url: String,
}

impl EventClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_all(&self) -> HttpRequest {
        get(format!("{}{EVENTS_PATH}", self.base_url))
    }

    /// The id is interpolated as-is: no validation, no percent-encoding.
    pub fn build_get_by_id(&self, id: impl Display) -> HttpRequest {
        get(format!("{}{EVENTS_PATH}/{id}", self.base_url))
    }

    pub fn parse_get_all(&self, response: HttpResponse) -> Result<Vec<Event>, TransportError> {
        decode(response)
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Event, TransportError> {
        decode(response)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
    }
}

/// Any 2xx is decoded; everything else becomes `TransportError::Status`.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, TransportError> {
    if !response.is_success() {
        return Err(TransportError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> EventClient {
        EventClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_all_produces_correct_request() {
        let req = client().build_get_all();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/v1/events");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_by_id_interpolates_verbatim() {
        let c = client();
        assert_eq!(c.build_get_by_id("1").url, "http://localhost:3000/api/v1/events/1");
        assert_eq!(c.build_get_by_id(42).url, "http://localhost:3000/api/v1/events/42");
        assert_eq!(
            c.build_get_by_id("a b/c").url,
            "http://localhost:3000/api/v1/events/a b/c"
        );
    }

    #[test]
    fn build_get_by_id_with_empty_id() {
        let req = client().build_get_by_id("");
        assert_eq!(req.url, "http://localhost:3000/api/v1/events/");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EventClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_get_all().url, "http://localhost:3000/api/v1/events");
    }

    #[test]
    fn parse_get_all_returns_body_verbatim() {
        let events = client()
            .parse_get_all(response(200, r#"[{"id":"1","name":"Launch"}]"#))
            .unwrap();
        assert_eq!(events, vec![Event::new(json!({"id": "1", "name": "Launch"}))]);
    }

    #[test]
    fn parse_accepts_any_2xx() {
        let event = client()
            .parse_get_by_id(response(203, r#"{"id":"1"}"#))
            .unwrap();
        assert_eq!(event.id().as_deref(), Some("1"));
    }

    #[test]
    fn parse_get_by_id_not_found_is_a_status_error() {
        let err = client()
            .parse_get_by_id(response(404, r#"{"error":"event not found"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                status: 404,
                body: r#"{"error":"event not found"}"#.to_string(),
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_get_all_rejects_non_array() {
        let err = client()
            .parse_get_all(response(200, r#"{"id":"1"}"#))
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn parse_get_all_bad_json() {
        let err = client().parse_get_all(response(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn parse_redirect_status_is_an_error() {
        let err = client().parse_get_all(response(302, "")).unwrap_err();
        assert_eq!(err.status(), Some(302));
    }
}
