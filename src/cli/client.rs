use anyhow::{anyhow, Context};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

/// HTTP client that unwraps the `{"success", "data"}` envelope
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("flightctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Value> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// Raw response body, for endpoints whose error body is still useful (health)
    pub async fn get_raw(&self, path: &str) -> anyhow::Result<(u16, Value)> {
        let response = self.request(Method::GET, path).send().await.context("request failed")?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.context("response was not JSON")?;
        Ok((status, body))
    }

    async fn send(&self, builder: RequestBuilder) -> anyhow::Result<Value> {
        let response = builder.send().await.context("request failed")?;
        let status = response.status();
        let body = response.json::<Value>().await.context("response was not JSON")?;
        unwrap_envelope(status.as_u16(), body)
    }
}

fn unwrap_envelope(status: u16, mut body: Value) -> anyhow::Result<Value> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null));
    }

    let message = body.get("error").and_then(Value::as_str).unwrap_or("request failed");
    let code = body.get("code").and_then(Value::as_str).unwrap_or("UNKNOWN");
    let mut error = format!("{} ({} {})", message, status, code);
    if let Some(fields) = body.get("field_errors").and_then(Value::as_object) {
        for (field, reason) in fields {
            error.push_str(&format!("\n  {}: {}", field, reason.as_str().unwrap_or_default()));
        }
    }
    Err(anyhow!(error))
}
