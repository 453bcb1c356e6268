//! HTTP client abstraction and native implementation.
//!
//! Provides the [`HttpClient`] trait and a native implementation backed by
//! [`reqwest`]. Environments only ever issue a single outbound call per
//! command, so the surface is deliberately small: one `request` method plus
//! `get`/`post` conveniences.

use std::collections::HashMap;

use async_trait::async_trait;

/// Boxed error returned by transport implementations.
///
/// Callers only ever surface the error's message text (command failures are
/// reported in-band as results), so a concrete error enum buys nothing here.
pub type HttpError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP response from a request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status: u16,
    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Parse body as UTF-8 text.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Parse body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Check if status is success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level HTTP operations.
///
/// The native implementation uses [`reqwest`]; tests provide mocks that
/// return canned [`HttpResponse`] values or errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send an HTTP request with the given method, URL, headers, and optional body.
    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, HttpError>;

    /// Send an HTTP GET request.
    async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        self.request("GET", url, headers, None).await
    }

    /// Send an HTTP POST request with a body.
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<HttpResponse, HttpError> {
        self.request("POST", url, headers, Some(body)).await
    }
}

/// Native HTTP client using [`reqwest`].
pub struct NativeHttpClient {
    client: reqwest::Client,
}

impl NativeHttpClient {
    /// Create a new native HTTP client with sensible defaults.
    ///
    /// Uses a 60-second timeout and 30-second idle connection timeout with
    /// connection pooling enabled. A request that hits the timeout surfaces
    /// as a transport error, which environments report in-band.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .pool_idle_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to build reqwest client"),
        }
    }
}

impl Default for NativeHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for NativeHttpClient {
    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, HttpError> {
        let reqwest_method = method.parse::<reqwest::Method>()?;
        let mut builder = self.client.request(reqwest_method, url);

        for (key, value) in headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(body_bytes) = body {
            builder = builder.body(body_bytes.to_vec());
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let mut resp_headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                resp_headers.insert(key.as_str().to_string(), v.to_string());
            }
        }
        let resp_body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers: resp_headers,
            body: resp_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: b"hello world".to_vec(),
        };
        assert_eq!(response.text().unwrap(), "hello world");
    }

    #[test]
    fn response_text_invalid_utf8() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: vec![0xFF, 0xFE],
        };
        assert!(response.text().is_err());
    }

    #[test]
    fn response_json() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: br#"{"code": 200}"#.to_vec(),
        };
        let parsed: serde_json::Value = response.json().unwrap();
        assert_eq!(parsed["code"], 200);
    }

    #[test]
    fn response_json_invalid() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: b"not json".to_vec(),
        };
        let result: Result<serde_json::Value, _> = response.json();
        assert!(result.is_err());
    }

    #[test]
    fn is_success_covers_2xx_only() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse {
                status,
                headers: HashMap::new(),
                body: vec![],
            };
            assert!(response.is_success(), "status {status} should be success");
        }
        for status in [100, 301, 400, 404, 500] {
            let response = HttpResponse {
                status,
                headers: HashMap::new(),
                body: vec![],
            };
            assert!(!response.is_success(), "status {status} should not be success");
        }
    }

    #[test]
    fn native_client_default() {
        let _client = NativeHttpClient::default();
    }

    #[test]
    fn client_trait_is_object_safe() {
        fn accepts_client(_c: &dyn HttpClient) {}
        accepts_client(&NativeHttpClient::new());
    }
}
