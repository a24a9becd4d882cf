use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Method;
use serde_json::Value;

/// Query value: a single string or a repeated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Option<BTreeMap<String, QueryValue>>,
    pub headers: BTreeMap<String, String>,
    pub json: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: None,
            headers: BTreeMap::new(),
            json: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: QueryValue) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Flattens the query map into ordered pairs, repeating keys for `Many`.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (k, v) in self.query.iter().flatten() {
            match v {
                QueryValue::One(s) => pairs.push((k.as_str(), s.as_str())),
                QueryValue::Many(vals) => {
                    pairs.extend(vals.iter().map(|s| (k.as_str(), s.as_str())))
                }
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs a single request. Non-2xx statuses come back as responses;
/// only transport failures are errors.
pub trait HttpExecutor {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method.clone(), &request.url);

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("invalid header name {name:?}"))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("invalid value for header {name}"))?;
            headers.insert(name, value);
        }
        builder = builder.headers(headers);

        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        tracing::debug!("{} {}", request.method, request.url);
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}
