//! Async client core for the events API.
//!
//! # Overview
//! Two read operations over the `/api/v1/events` collection: list every
//! event and fetch one by id. Response bodies come back exactly as the
//! server sent them.
//!
//! # Design
//! - `EventClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the injected network seam; `ReqwestTransport` is the
//!   stock implementation (cargo feature `reqwest`).
//! - `EventService` joins the two. One call, one round trip, no retry, no
//!   cache, every failure surfaced as `TransportError`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{EventClient, EVENTS_PATH};
pub use config::{ClientConfig, ConfigError};
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::EventService;
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::Event;
