use application::config::{BotToken, RoleColorConfig, UserAgent, DISCORD_API_BASE};
use clap::Args;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "DiscordBot (https://github.com/role-color, $)";

#[derive(Args)]
pub struct CommonArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub discord_bot_token: String,
    /// Timeout of a color update in milliseconds
    #[arg(long, env = "ROLE_COLOR_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,
    /// User agent template, `$` is replaced by the version
    #[arg(long, env = "ROLE_COLOR_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    #[arg(long, env = "DISCORD_API_BASE", default_value = DISCORD_API_BASE)]
    pub discord_api_base: String,
}

impl CommonArgs {
    pub fn into_config(self) -> RoleColorConfig {
        let CommonArgs {
            discord_bot_token,
            timeout_ms,
            user_agent,
            discord_api_base,
        } = self;

        RoleColorConfig::new(
            BotToken(discord_bot_token),
            Duration::from_millis(timeout_ms),
            UserAgent::from_template(&user_agent, env!("CARGO_PKG_VERSION")),
        )
        .with_api_base(discord_api_base)
    }
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// The ID of the Discord guild (server) the role belongs to
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild: u64,
    /// The ID of the role to recolor
    #[arg(long)]
    pub role: u64,
    /// Color as `#RRGGBB`, anything else is treated as white
    #[arg(long)]
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_config_from_args() {
        let args = CommonArgs {
            discord_bot_token: "token".to_string(),
            timeout_ms: 750,
            user_agent: "bot ($)".to_string(),
            discord_api_base: DISCORD_API_BASE.to_string(),
        };

        let config = args.into_config();

        assert_eq!(config.token.0, "token");
        assert_eq!(config.timeout, Duration::from_millis(750));
        assert_eq!(
            config.user_agent.0,
            format!("bot ({})", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(config.api_base, "https://discordapp.com/api");
    }
}
