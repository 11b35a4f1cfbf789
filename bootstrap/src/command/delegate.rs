use crate::args::{CommonArgs, TargetArgs};
use application::role_color::RoleColorService;
use domain_shared::discord::{GuildId, RoleId};
use infrastructure::discord::SerenityRole;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(level = "info", skip(common_args))]
pub async fn run(common_args: CommonArgs, args: TargetArgs) -> anyhow::Result<()> {
    let config = common_args.into_config();
    let TargetArgs { guild, role, color } = args;

    let serenity_client = Arc::new(serenity::Http::new(&config.token.0));
    let serenity_role = Arc::new(SerenityRole::new(
        serenity_client,
        GuildId(guild),
        RoleId(role),
    ));
    let service = RoleColorService::new(config);

    service.update_color(serenity_role, &color).await?;

    info!(guild, role, "Role color updated");

    Ok(())
}
