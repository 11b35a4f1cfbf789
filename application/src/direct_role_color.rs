use crate::config::RoleColorConfig;
use domain::color::color_from_color_hex;
use domain::ports::discord::{
    DiscordHttpError, DiscordHttpPort, DiscordRequest, DiscordResponse, Method,
};
use domain_shared::discord::{GuildId, RoleId};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Updates role colors with a raw `PATCH` against the Discord REST API,
/// bypassing the client library.
pub struct DirectRoleColorService {
    discord_http_port: Arc<dyn DiscordHttpPort + Send + Sync>,
    config: RoleColorConfig,
}

impl DirectRoleColorService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_http_port: Arc<dyn DiscordHttpPort + Send + Sync>,
        config: RoleColorConfig,
    ) -> Self {
        Self {
            discord_http_port,
            config,
        }
    }

    /// Single attempt. Errors are logged and returned exactly as the port produced them.
    #[instrument(level = "info", skip(self))]
    pub async fn update_color_direct(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        color_hex: &str,
    ) -> Result<DiscordResponse, DiscordHttpError> {
        info!(
            target: "update_color",
            "directly updating color for role {}/{} to {}",
            guild_id,
            role_id,
            color_hex.to_uppercase(),
        );

        let request = self.create_request(guild_id, role_id, color_hex);

        match self.discord_http_port.execute(request).await {
            Ok(response) => {
                info!(
                    target: "update_color",
                    "directly updated color successfully on {}/{}",
                    guild_id,
                    role_id,
                );
                Ok(response)
            }
            Err(err) => {
                let payload = diagnostic_payload(&err);
                info!(
                    target: "update_color",
                    "direct update for {}/{} failed! {}",
                    guild_id,
                    role_id,
                    payload,
                );
                error!(
                    target: "update_color_error",
                    "direct update for {}/{} failed! {}",
                    guild_id,
                    role_id,
                    payload,
                );
                debug!(target: "update_color_error_verbose", "{:?}", err);
                Err(err)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn create_request(&self, guild_id: GuildId, role_id: RoleId, color_hex: &str) -> DiscordRequest {
        let RoleColorConfig {
            token,
            timeout,
            user_agent,
            api_base,
        } = &self.config;

        let color = color_from_color_hex(color_hex);

        DiscordRequest {
            method: Method::Patch,
            url: format!("{}/guilds/{}/roles/{}", api_base, guild_id, role_id),
            headers: vec![
                ("Authorization".to_string(), format!("Bot {}", token.0)),
                ("User-Agent".to_string(), user_agent.0.clone()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: json!({ "color": color }),
            timeout: *timeout,
        }
    }
}

/// What gets logged for a failed direct update.
#[derive(Debug)]
pub enum DiagnosticPayload<'a> {
    ResponseData(&'a Value),
    Error(&'a DiscordHttpError),
}

impl fmt::Display for DiagnosticPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticPayload::ResponseData(data) => write!(f, "{}", data),
            DiagnosticPayload::Error(err) => write!(f, "{}", err),
        }
    }
}

/// Prefers the body Discord answered with, falling back to the error itself.
pub fn diagnostic_payload(err: &DiscordHttpError) -> DiagnosticPayload<'_> {
    err.response_data()
        .map(DiagnosticPayload::ResponseData)
        .unwrap_or(DiagnosticPayload::Error(err))
}
