// ABOUTME: HTTP/1.1 dispatcher built on hyper over plain TCP.
// ABOUTME: One connection per request; unwraps the backend envelope.

use super::{DispatchError, Dispatcher, Reply, Request};
use crate::config::{ClientConfig, Endpoint};
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, HOST, HeaderName, HeaderValue};
use hyper_util::rt::TokioIo;
use std::time::Duration;
use tokio::net::TcpStream;

/// Dispatcher that talks to the panel backend over HTTP/1.1.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl HttpDispatcher {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout: None,
            headers: Vec::new(),
        }
    }

    /// Build a dispatcher from loaded configuration, resolving header values.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut dispatcher = Self::new(config.server.clone()).with_timeout(config.request_timeout());
        for (name, value) in config.resolved_headers()? {
            dispatcher = dispatcher
                .with_header(&name, &value)
                .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        }
        Ok(dispatcher)
    }

    /// Limit the whole exchange (connect, send, read) to `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send an extra header with every request.
    pub fn with_header(
        mut self,
        name: &str,
        value: &str,
    ) -> std::result::Result<Self, DispatchError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| DispatchError::InvalidRequest(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| DispatchError::InvalidRequest(format!("header {name}: {e}")))?;
        self.headers.push((name, value));
        Ok(self)
    }

    /// Assemble the outgoing request; fails before any connection is made.
    fn build_request(
        &self,
        request: &Request,
    ) -> std::result::Result<hyper::Request<Full<Bytes>>, DispatchError> {
        // A `#` would start a URI fragment and silently truncate the path.
        if request.path.contains('#') {
            return Err(DispatchError::InvalidRequest(format!(
                "path {:?} contains a fragment delimiter",
                request.path
            )));
        }

        let uri = self.endpoint.url_path(&request.path);
        let mut builder = hyper::Request::builder()
            .method(hyper::Method::from(request.method))
            .uri(&uri)
            .header(HOST, self.endpoint.host_header())
            .header(ACCEPT, "application/json");

        for (name, value) in &self.headers {
            builder = builder.header(name.clone(), value.clone());
        }

        let body = match &request.body {
            Some(body) => {
                builder = builder.header(CONTENT_TYPE, body.content_type());
                body.encode()
            }
            None => Bytes::new(),
        };
        builder = builder.header(CONTENT_LENGTH, body.len());

        builder
            .body(Full::new(body))
            .map_err(|e| DispatchError::InvalidRequest(format!("{uri}: {e}")))
    }

    async fn send(&self, request: &Request) -> std::result::Result<Reply, DispatchError> {
        let req = self.build_request(request)?;

        let address = self.endpoint.authority();
        let stream = TcpStream::connect(&address)
            .await
            .map_err(|e| DispatchError::Connect {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| DispatchError::Http(format!("handshake failed: {e}")))?;

        // Drive the connection until the response has been read.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::warn!("panel connection error: {}", e);
            }
        });

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| DispatchError::Http(format!("request failed: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| DispatchError::Http(format!("failed to read response: {e}")))?
            .to_bytes();

        interpret_response(status, &body)
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: Request) -> std::result::Result<Reply, DispatchError> {
        tracing::debug!(endpoint = %self.endpoint, "dispatching {}", request);

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(&request))
                .await
                .unwrap_or_else(|_| Err(DispatchError::Timeout(limit))),
            None => self.send(&request).await,
        };

        if let Err(ref e) = result {
            tracing::warn!("{} failed: {}", request, e);
        }
        result
    }
}

/// Map a raw HTTP response onto the envelope contract.
fn interpret_response(status: u16, body: &[u8]) -> std::result::Result<Reply, DispatchError> {
    let parsed = serde_json::from_slice::<Reply>(body);

    if !(200..300).contains(&status) {
        return Err(match parsed {
            Ok(reply) => DispatchError::Backend {
                status,
                code: reply.code,
                message: reply.message,
            },
            Err(_) => DispatchError::Status {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        });
    }

    let reply = parsed.map_err(|e| DispatchError::MalformedResponse(e.to_string()))?;
    if !reply.is_success() {
        return Err(DispatchError::Backend {
            status,
            code: reply.code,
            message: reply.message,
        });
    }

    Ok(reply)
}
