use crate::discord::id::{domain_to_serenity_guild_id, domain_to_serenity_role_id};
use async_trait::async_trait;
use domain::color::color_from_color_hex;
use domain::ports::role::{ColorableRole, Result};
use domain_shared::discord::{GuildId, RoleId};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::instrument;

/// Guild role edited through serenity's HTTP client.
pub struct SerenityRole {
    client: Arc<serenity::Http>,
    guild_id: GuildId,
    role_id: RoleId,
}

impl SerenityRole {
    #[instrument(level = "trace", skip(client))]
    pub fn new(client: Arc<serenity::Http>, guild_id: GuildId, role_id: RoleId) -> Self {
        Self {
            client,
            guild_id,
            role_id,
        }
    }
}

#[async_trait]
impl ColorableRole for SerenityRole {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    fn role_id(&self) -> RoleId {
        self.role_id
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn set_color(&self, color_hex: &str) -> Result<()> {
        let guild_id = domain_to_serenity_guild_id(self.guild_id);
        let role_id = domain_to_serenity_role_id(self.role_id);

        guild_id
            .edit_role(&self.client, role_id, create_edit_role(color_hex))
            .await?;

        Ok(())
    }
}

fn create_edit_role(color_hex: &str) -> serenity::EditRole<'static> {
    let color = color_from_color_hex(color_hex);

    serenity::EditRole::new().colour(color.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edit_role_carries_parsed_color() {
        let edit_role = serde_json::to_value(create_edit_role("#1a2b3c")).unwrap();

        assert_eq!(edit_role["color"], json!(1715004));
    }

    #[test]
    fn edit_role_falls_back_to_white() {
        let edit_role = serde_json::to_value(create_edit_role("blue")).unwrap();

        assert_eq!(edit_role["color"], json!(16777215));
    }

    #[test]
    fn exposes_guild_and_role() {
        let client = Arc::new(serenity::Http::new("token"));
        let role = SerenityRole::new(client, GuildId(111), RoleId(222));

        assert_eq!(role.guild_id(), GuildId(111));
        assert_eq!(role.role_id(), RoleId(222));
    }
}
