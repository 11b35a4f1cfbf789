use crate::discord::method::domain_to_reqwest_method;
use async_trait::async_trait;
use domain::ports::discord::{DiscordHttpError, DiscordHttpPort, DiscordRequest, DiscordResponse};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{instrument, warn};

pub struct DiscordHttpAdapter {
    http_client: HttpClient,
}

impl DiscordHttpAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new() -> Self {
        let http_client = HttpClient::new();

        Self { http_client }
    }

    #[instrument(level = "trace", skip_all)]
    fn create_request(&self, request: DiscordRequest) -> reqwest::Result<reqwest::Request> {
        let DiscordRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self
            .http_client
            .request(domain_to_reqwest_method(method), url)
            .timeout(timeout);

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        builder.body(body.to_string()).build()
    }
}

impl Default for DiscordHttpAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiscordHttpPort for DiscordHttpAdapter {
    #[instrument(level = "debug", err, skip(self, request), fields(url = %request.url))]
    async fn execute(&self, request: DiscordRequest) -> Result<DiscordResponse, DiscordHttpError> {
        let request = self.create_request(request).map_err(map_transport_err)?;

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(map_transport_err)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_err)?;
        let data = parse_response_data(&text);

        if !status.is_success() {
            return Err(DiscordHttpError::Status {
                status: status.as_u16(),
                data,
            });
        }

        Ok(DiscordResponse {
            status: status.as_u16(),
            data,
        })
    }
}

/// Discord answers with JSON; anything else is kept verbatim as a string.
fn parse_response_data(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn map_transport_err(err: reqwest::Error) -> DiscordHttpError {
    warn!("Discord request failed: {:?}", err);
    DiscordHttpError::Transport(Box::new(err))
}
