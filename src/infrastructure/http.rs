//! JSON transport for the rental service
//!
//! Every backend call goes through [`HttpClient::request`], which attaches the
//! JSON content type, turns non-success responses into [`ClientError::Api`]
//! and only decodes success bodies the server labelled as JSON.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::domain::ClientError;

/// Fields checked, in order, for a human readable message in error bodies
const MESSAGE_FIELDS: [&str; 3] = ["message", "error", "title"];

const FALLBACK_MESSAGE: &str = "Request failed";

#[derive(Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Extra headers, merged over the default JSON content type
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode a JSON success body.
    ///
    /// Returns `Ok(None)` when the server answers successfully without a JSON
    /// content type (typical for `204 No Content`).
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        tracing::debug!("{} {}", options.method, url);

        let method = options.method.clone();
        let mut builder = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        let json = is_json(&response);

        if !status.is_success() {
            let details = read_error_body(response, json).await;
            let message = error_message(status, details.as_ref());
            tracing::warn!("{} {} failed with {}: {}", method, url, status.as_u16(), message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                details,
            });
        }

        if !json {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let parsed = serde_json::from_slice(&bytes)?;
        Ok(Some(parsed))
    }

    /// Issue a request whose success body, if any, is ignored
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<(), ClientError> {
        self.request::<IgnoredAny>(path, options).await?;
        Ok(())
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

async fn read_error_body(response: Response, json: bool) -> Option<Value> {
    if json {
        let bytes = response.bytes().await.ok()?;
        serde_json::from_slice(&bytes).ok()
    } else {
        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            None
        } else {
            Some(Value::String(text))
        }
    }
}

/// Pick the message for a failed response: a string field of a JSON object
/// body, a plain text body, then the status reason phrase.
pub fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    let extracted = match body {
        Some(Value::Object(map)) => MESSAGE_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str)),
        Some(Value::String(text)) => Some(text.as_str()),
        _ => None,
    };

    extracted
        .filter(|msg| !msg.is_empty())
        .or_else(|| status.canonical_reason())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}
