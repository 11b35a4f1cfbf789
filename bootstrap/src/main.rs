mod args;
mod command;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Update the color of a Discord guild role
#[derive(Parser)]
#[command(name = "role-color", version)]
struct Cli {
    #[command(flatten)]
    common_args: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Cli {
        common_args,
        command,
    } = Cli::parse();

    command.run(common_args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_direct_command() {
        let cli = Cli::try_parse_from([
            "role-color",
            "--discord-bot-token",
            "token",
            "--timeout-ms",
            "1200",
            "direct",
            "--guild",
            "111",
            "--role",
            "222",
            "--color",
            "#1A2B3C",
        ])
        .unwrap();

        assert_eq!(cli.common_args.timeout_ms, 1200);
        match cli.command {
            Command::Direct(target) => {
                assert_eq!(target.guild, 111);
                assert_eq!(target.role, 222);
                assert_eq!(target.color, "#1A2B3C");
            }
            Command::Delegate(_) => panic!("expected direct command"),
        }
    }
}
