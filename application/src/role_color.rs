use crate::config::RoleColorConfig;
use domain::ports::role::{ColorableRole, Error as DelegateError};
use domain_shared::discord::{GuildId, RoleId};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Updates role colors through the role's own client, bounded by the configured timeout.
pub struct RoleColorService {
    timeout: Duration,
}

#[derive(Debug, Error)]
pub enum RoleColorError {
    #[error("Role color update failed: {0}")]
    Role(#[source] DelegateError),
    #[error("Timed out")]
    TimedOut,
}

impl RoleColorService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: RoleColorConfig) -> Self {
        Self {
            timeout: config.timeout,
        }
    }

    /// Races the role's `set_color` against the timeout.
    ///
    /// A failed `set_color` is only reported once the timeout window has passed
    /// after the failure, so a failure arriving later than the start yields
    /// `TimedOut`. When the role fails at once, both deadlines usually land in the
    /// same timer tick and the role's error is polled first; this is not
    /// guaranteed on a real clock. The spawned call is never cancelled; if the
    /// timeout wins, its outcome only shows up in the logs.
    #[instrument(level = "info", skip(self, role))]
    pub async fn update_color(
        &self,
        role: Arc<dyn ColorableRole + Send + Sync>,
        color_hex: &str,
    ) -> Result<(), RoleColorError> {
        let guild_id = role.guild_id();
        let role_id = role.role_id();
        let timeout = self.timeout;

        info!(
            target: "update_color",
            "updating color for role {}/{} to {}",
            guild_id,
            role_id,
            color_hex.to_uppercase(),
        );

        let delegate = tokio::spawn(set_color(role, color_hex.to_string()));

        let delegate_path = async move {
            let err = match delegate.await {
                Ok(Ok(())) => return Ok(()),
                Ok(Err(err)) => err,
                Err(join_err) => {
                    log_delegate_failure(guild_id, role_id, &join_err);
                    DelegateError::from(join_err)
                }
            };
            tokio::time::sleep(timeout).await;
            Err(RoleColorError::Role(err))
        };

        let timeout_path = async move {
            tokio::time::sleep(timeout).await;
            info!(
                target: "update_color",
                "update for {}/{} timed out!",
                guild_id,
                role_id,
            );
            error!(
                target: "update_color_error",
                "update for {}/{} timed out!",
                guild_id,
                role_id,
            );
            Err::<(), _>(RoleColorError::TimedOut)
        };

        tokio::select! {
            biased;
            result = delegate_path => result,
            result = timeout_path => result,
        }
    }
}

#[instrument(level = "debug", skip(role))]
async fn set_color(
    role: Arc<dyn ColorableRole + Send + Sync>,
    color_hex: String,
) -> Result<(), DelegateError> {
    let guild_id = role.guild_id();
    let role_id = role.role_id();

    match role.set_color(&color_hex).await {
        Ok(()) => {
            info!(
                target: "update_color",
                "updated color successfully on {}/{}",
                guild_id,
                role_id,
            );
            Ok(())
        }
        Err(err) => {
            log_delegate_failure(guild_id, role_id, &err);
            Err(err)
        }
    }
}

fn log_delegate_failure(guild_id: GuildId, role_id: RoleId, err: &impl Display) {
    info!(
        target: "update_color",
        "update for {}/{} failed! (waiting a bit and trying again) {}",
        guild_id,
        role_id,
        err,
    );
    error!(
        target: "update_color_error",
        "update for {}/{} failed! (waiting a bit and trying again) {}",
        guild_id,
        role_id,
        err,
    );
}
