use crate::args::{CommonArgs, TargetArgs};
use application::direct_role_color::DirectRoleColorService;
use domain_shared::discord::{GuildId, RoleId};
use infrastructure::discord::DiscordHttpAdapter;
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(level = "info", skip(common_args))]
pub async fn run(common_args: CommonArgs, args: TargetArgs) -> anyhow::Result<()> {
    let config = common_args.into_config();
    let TargetArgs { guild, role, color } = args;

    let discord_http_adapter = Arc::new(DiscordHttpAdapter::new());
    let service = DirectRoleColorService::new(discord_http_adapter, config);

    let response = service
        .update_color_direct(GuildId(guild), RoleId(role), &color)
        .await?;

    info!(status = response.status, "Role color updated: {}", response.data);

    Ok(())
}
