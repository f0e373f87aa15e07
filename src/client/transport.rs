use actix_web::http::Method;
use async_trait::async_trait;
use derive_more::Display;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<Value>,
}

/// Whatever came back, including error statuses. A body that is not JSON
/// is reported as `Value::Null`.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// No response reached the client.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "no server response: {}", _0)]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

pub struct HttpTransport {
    base_url: String,
    client: awc::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpTransport {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: awc::Client::default(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("{} {}", request.method, url);

        let builder = self.client.request(request.method, url);
        let sent = match &request.body {
            Some(body) => builder.send_json(body).await,
            None => builder.send().await,
        };
        let mut response = sent.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .body()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}
