//! HTTP Transport
//!
//! HTTP client interface and implementations for LinkedIn requests. Sessions
//! talk to the network only through [`HttpTransport`], so tests and callers
//! with their own HTTP stack can inject an implementation.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::config::headers;
use crate::errors::{DecodeError, LinkedInResult, TransportError};

/// HTTP request definition.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a GET request without headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a POST request with a body of the given content type.
    pub fn post(url: impl Into<String>, content_type: &str, body: impl Into<String>) -> Self {
        Self::get(url)
            .with_method(HttpMethod::Post)
            .with_header(headers::CONTENT_TYPE, content_type)
            .with_body(body)
    }

    fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// HTTP response definition.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lower-cased.
    pub headers: HashMap<String, String>,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with the given status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a JSON response.
    pub fn json_body(status: u16, body: &serde_json::Value) -> Self {
        let mut response = Self::new(status, body.to_string());
        response
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
        response
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_slice(&self.body).map_err(DecodeError::from)
    }
}

/// HTTP transport interface (for dependency injection).
///
/// Implementations must tolerate concurrent use when shared across sessions.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request.
    async fn send(&self, request: HttpRequest) -> LinkedInResult<HttpResponse>;

    /// Send a bare GET request.
    async fn get(&self, url: &str) -> LinkedInResult<HttpResponse> {
        self.send(HttpRequest::get(url)).await
    }

    /// Send a POST request with the given content type.
    async fn post(&self, url: &str, content_type: &str, body: String) -> LinkedInResult<HttpResponse> {
        self.send(HttpRequest::post(url, content_type, body)).await
    }
}

/// Default reqwest-based HTTP transport.
pub struct ReqwestHttpTransport {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl ReqwestHttpTransport {
    /// Create a transport with the given timeouts.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> LinkedInResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::RequestFailed {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self::with_client(client, timeout))
    }

    /// Create a transport around a pre-built client.
    pub fn with_client(client: reqwest::Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn send(&self, request: HttpRequest) -> LinkedInResult<HttpResponse> {
        let timeout = self.default_timeout;

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.timeout(timeout).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { timeout }
            } else if e.is_connect() {
                TransportError::ConnectionFailed {
                    message: e.to_string(),
                }
            } else {
                TransportError::RequestFailed {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.as_str().to_lowercase(), v.to_string());
            }
        }

        let body = response.bytes().await.map_err(|e| DecodeError::BodyRead {
            message: e.to_string(),
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHttpTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

/// Mock HTTP transport for testing.
///
/// Responses are returned in the order they were queued.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    request_history: Mutex<Vec<HttpRequest>>,
    default_response: Mutex<Option<HttpResponse>>,
    delay: Mutex<Option<Duration>>,
}

impl MockHttpTransport {
    /// Create new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: HttpResponse) -> &Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a JSON response.
    pub fn queue_json_response(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.queue_response(HttpResponse::json_body(status, body))
    }

    /// Set default response when queue is empty.
    pub fn set_default_response(&self, response: HttpResponse) -> &Self {
        *self.default_response.lock() = Some(response);
        self
    }

    /// Delay every response, to exercise cancellation and deadlines.
    pub fn set_delay(&self, delay: Duration) -> &Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Get request history.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.request_history.lock().clone()
    }

    /// Get last request.
    pub fn get_last_request(&self) -> Option<HttpRequest> {
        self.request_history.lock().last().cloned()
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.request_history.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> LinkedInResult<HttpResponse> {
        self.request_history.lock().push(request);

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self
            .responses
            .lock()
            .pop_front()
            .or_else(|| self.default_response.lock().clone());

        response.ok_or_else(|| {
            TransportError::ConnectionFailed {
                message: "no mock response available".to_string(),
            }
            .into()
        })
    }
}
