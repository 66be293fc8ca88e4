//! The network seam between `EventClient` and the outside world.
//!
//! A `Transport` takes an absolute `HttpRequest` and hands back whatever the
//! server answered as an `HttpResponse`, whatever the status. Status
//! interpretation belongs to the parser, so a transport only fails when no
//! response was obtained at all.

use std::future::Future;
use std::sync::Arc;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).execute(request)
    }
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use super::*;
    use crate::config::ClientConfig;
    use crate::http::HttpMethod;

    /// `Transport` backed by a shared `reqwest::Client`.
    ///
    /// Default headers from the config are sent ahead of request headers.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
        default_headers: Vec<(String, String)>,
    }

    impl ReqwestTransport {
        pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
            let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(Self::with_client(client, config.default_headers.clone()))
        }

        /// Redirect handling is whatever `client` was built with; `new`
        /// disables it so a 3xx reaches the parser.
        pub fn with_client(client: reqwest::Client, default_headers: Vec<(String, String)>) -> Self {
            Self {
                client,
                default_headers,
            }
        }
    }

    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
            };
            let mut builder = self.client.request(method, &request.url);
            for (name, value) in self.default_headers.iter().chain(request.headers.iter()) {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status().as_u16();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let body = String::from_utf8(bytes.to_vec())
                .map_err(|e| TransportError::Decode(e.to_string()))?;

            Ok(HttpResponse { status, body })
        }
    }
}
