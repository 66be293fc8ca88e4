//! The events facade.
//!
//! # Design
//! `EventService` pairs an `EventClient` with an injected `Transport`. It
//! owns no mutable state, so one instance can serve any number of
//! concurrent callers. Each operation is exactly one round trip: no retry,
//! no caching, and errors are returned untouched.

use std::fmt::Display;

use tracing::{debug, warn};

use crate::client::EventClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Event;

#[derive(Debug, Clone)]
pub struct EventService<T> {
    client: EventClient,
    transport: T,
}

impl<T: Transport> EventService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_client(EventClient::new(base_url), transport)
    }

    pub fn with_client(client: EventClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}/api/v1/events`, decoded as a list of events.
    pub async fn get_all(&self) -> Result<Vec<Event>, TransportError> {
        let response = self.round_trip(self.client.build_get_all()).await?;
        self.client.parse_get_all(response)
    }

    /// `GET {base}/api/v1/events/{id}`, decoded as a single event.
    ///
    /// A missing event surfaces as `TransportError::Status` carrying
    /// whatever status the server chose.
    pub async fn get_by_id(&self, id: impl Display) -> Result<Event, TransportError> {
        let request = self.client.build_get_by_id(id);
        let response = self.round_trip(request).await?;
        self.client.parse_get_by_id(response)
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let url = request.url.clone();
        let response = self
            .transport
            .execute(request)
            .await
            .inspect_err(|e| warn!(%url, error = %e, "transport failed"))?;
        if response.is_success() {
            debug!(%url, status = response.status, "received response");
        } else {
            warn!(%url, status = response.status, "non-success status");
        }
        Ok(response)
    }
}

#[cfg(feature = "reqwest")]
impl EventService<crate::transport::ReqwestTransport> {
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self, TransportError> {
        let transport = crate::transport::ReqwestTransport::new(config)?;
        Ok(Self::new(&config.base_url, transport))
    }
}
