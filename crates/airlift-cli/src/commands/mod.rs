mod deploy;
mod pack;
mod wait;

use std::time::Duration;

use airlift_core::{AirliftConfig, Credential};
use airlift_platform::PollOptions;
use tokio_util::sync::CancellationToken;

pub use deploy::deploy;
pub use pack::pack;
pub use wait::wait;

/// Environment variable holding the platform API token.
pub(crate) const TOKEN_ENV: &str = "AIRLIFT_API_TOKEN";

/// Assemble the credential from the environment and config/flags.
pub(crate) fn credential(config: &AirliftConfig, app_flag: Option<&str>) -> anyhow::Result<Credential> {
    let token = std::env::var(TOKEN_ENV).unwrap_or_default();
    if token.trim().is_empty() {
        anyhow::bail!("{TOKEN_ENV} is not set");
    }

    let app = app_flag
        .map(str::to_owned)
        .or_else(|| config.app.name.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("app name not set; pass --app or set [app].name in airlift.toml")
        })?;

    Ok(Credential::new(token, app))
}

pub(crate) fn poll_options(config: &AirliftConfig) -> PollOptions {
    PollOptions {
        interval: Duration::from_secs(config.poll.interval_secs),
        max_attempts: config.poll.max_attempts,
    }
}

/// Token that trips on Ctrl-C so a poll loop can wind down cleanly.
pub(crate) fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });
    cancel
}
