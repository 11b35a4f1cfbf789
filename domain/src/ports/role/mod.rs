use async_trait::async_trait;
use domain_shared::discord::{GuildId, RoleId};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A guild role whose color can be changed through a higher-level client.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ColorableRole {
    fn guild_id(&self) -> GuildId;

    fn role_id(&self) -> RoleId;

    async fn set_color(&self, color_hex: &str) -> Result<()>;
}
