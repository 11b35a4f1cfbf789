pub mod delegate;
pub mod direct;

use crate::args::{CommonArgs, TargetArgs};
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Send the PATCH to the Discord REST API directly
    #[command(name = "direct")]
    Direct(TargetArgs),
    /// Go through serenity, giving up after the timeout
    #[command(name = "delegate")]
    Delegate(TargetArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Direct(args) => direct::run(common_args, args).await,
            Command::Delegate(args) => delegate::run(common_args, args).await,
        }
    }
}
