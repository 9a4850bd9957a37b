mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "airlift", about = "Package a directory and deploy it to a remote build service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package a directory, upload it, and build it
    Deploy {
        /// Directory to package
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Application name (overrides airlift.toml)
        #[arg(long)]
        app: Option<String>,
        /// Package everything, skipping .gitignore filtering
        #[arg(long)]
        no_ignore: bool,
        /// Return once the build is created instead of waiting for it
        #[arg(long)]
        detach: bool,
    },
    /// Wait for an existing build to finish
    Wait {
        /// Build identifier
        build_id: String,
        /// Application name (overrides airlift.toml)
        #[arg(long)]
        app: Option<String>,
    },
    /// Write the directory archive to a file without uploading
    Pack {
        /// Directory to package
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Package everything, skipping .gitignore filtering
        #[arg(long)]
        no_ignore: bool,
        /// Output path for the tar.gz archive
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            dir,
            app,
            no_ignore,
            detach,
        } => commands::deploy(&dir, app.as_deref(), !no_ignore, detach).await?,
        Commands::Wait { build_id, app } => commands::wait(&build_id, app.as_deref()).await?,
        Commands::Pack {
            dir,
            no_ignore,
            output,
        } => commands::pack(&dir, !no_ignore, &output)?,
    }

    Ok(())
}
