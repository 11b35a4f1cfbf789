use domain_shared::discord::{GuildId, RoleId};
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(guild_id))]
pub fn domain_to_serenity_guild_id(guild_id: GuildId) -> serenity::GuildId {
    serenity::GuildId::new(guild_id.0)
}

#[instrument(level = "trace", skip(role_id))]
pub fn domain_to_serenity_role_id(role_id: RoleId) -> serenity::RoleId {
    serenity::RoleId::new(role_id.0)
}
