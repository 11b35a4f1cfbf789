use std::time::Duration;

pub const DISCORD_API_BASE: &str = "https://discordapp.com/api";

/// Placeholder in a user agent template that is replaced by the package version.
pub const VERSION_PLACEHOLDER: char = '$';

#[derive(Clone)]
pub struct BotToken(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgent(pub String);

impl UserAgent {
    /// Only the first placeholder is substituted.
    pub fn from_template(template: &str, version: &str) -> Self {
        UserAgent(template.replacen(VERSION_PLACEHOLDER, version, 1))
    }
}

#[derive(Clone)]
pub struct RoleColorConfig {
    pub token: BotToken,
    /// Used both as the HTTP request timeout and as the delegate race window.
    pub timeout: Duration,
    pub user_agent: UserAgent,
    pub api_base: String,
}

impl RoleColorConfig {
    pub fn new(token: BotToken, timeout: Duration, user_agent: UserAgent) -> Self {
        Self {
            token,
            timeout,
            user_agent,
            api_base: DISCORD_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_substitutes_version() {
        let user_agent = UserAgent::from_template("DiscordBot (https://example.com, $)", "1.2.3");
        assert_eq!(user_agent.0, "DiscordBot (https://example.com, 1.2.3)");
    }

    #[test]
    fn user_agent_substitutes_only_first_placeholder() {
        let user_agent = UserAgent::from_template("bot/$ ($)", "0.4.0");
        assert_eq!(user_agent.0, "bot/0.4.0 ($)");
    }

    #[test]
    fn user_agent_without_placeholder_is_kept() {
        let user_agent = UserAgent::from_template("static-agent", "0.4.0");
        assert_eq!(user_agent.0, "static-agent");
    }

    #[test]
    fn config_defaults_to_discord_api() {
        let config = RoleColorConfig::new(
            BotToken("token".to_string()),
            Duration::from_millis(5000),
            UserAgent("agent".to_string()),
        );
        assert_eq!(config.api_base, "https://discordapp.com/api");

        let config = config.with_api_base("http://localhost:8080/api");
        assert_eq!(config.api_base, "http://localhost:8080/api");
    }
}
