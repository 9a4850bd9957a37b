use std::path::PathBuf;

use airlift_core::AirliftConfig;
use airlift_platform::DeployClient;

pub async fn wait(build_id: &str, app: Option<&str>) -> anyhow::Result<()> {
    let config = AirliftConfig::load(&PathBuf::from("."))?;
    let auth = super::credential(&config, app)?;
    let client = DeployClient::new(config.api.base_url.clone());

    println!("Waiting for build {build_id}...");
    let outcome = client
        .await_completion_with(
            &auth,
            build_id,
            &super::poll_options(&config),
            super::cancel_on_ctrl_c(),
        )
        .await?;

    println!("Build {} {}", outcome.build.id, outcome.build.status);

    Ok(())
}
