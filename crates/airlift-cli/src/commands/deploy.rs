use std::path::Path;

use airlift_archive::pack_dir_with_ignore_file;
use airlift_core::AirliftConfig;
use airlift_platform::DeployClient;

/// Execute the full deploy pipeline: pack, upload, build, wait.
pub async fn deploy(
    dir: &Path,
    app: Option<&str>,
    use_ignore_file: bool,
    detach: bool,
) -> anyhow::Result<()> {
    let config = AirliftConfig::load(dir)?;
    let auth = super::credential(&config, app)?;
    let client = DeployClient::new(config.api.base_url.clone());

    println!("Packaging {}...", dir.display());
    let archive = pack_dir_with_ignore_file(dir, use_ignore_file)?;
    println!("  {} bytes", archive.len());

    println!("Uploading to {}...", config.api.base_url);
    let build = client.upload(&auth, archive).await?;
    println!("  Build ID: {}", build.id);

    if detach {
        println!("Detached. Follow it with: airlift wait {}", build.id);
        return Ok(());
    }

    println!("Building...");
    let outcome = client
        .await_completion_with(
            &auth,
            &build.id,
            &super::poll_options(&config),
            super::cancel_on_ctrl_c(),
        )
        .await?;

    println!();
    println!("Build {} {}", outcome.build.id, outcome.build.status);

    Ok(())
}
