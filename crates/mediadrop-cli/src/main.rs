//! Mediadrop CLI: upload a file through the uploader widget from a terminal.
//!
//! Set MEDIADROP_API_URL (or API_URL), or pass --server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediadrop_api_client::{ApiClient, SelectedFile, Uploader};
use mediadrop_cli::{guess_mime_type, init_from_env, CommandLinePicker, UploadOutcome};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mediadrop", about = "Mediadrop upload CLI")]
struct Cli {
    /// Base URL of the upload server
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and print its public URL
    Upload {
        /// Path to the file to upload
        file: PathBuf,
        /// MIME type to send (guessed from the extension when omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_from_env();

    let cli = Cli::parse();

    let client = match cli.server {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    }
    .context("Failed to create API client. Set MEDIADROP_API_URL (or API_URL)")?;

    match cli.command {
        Commands::Upload { file, content_type } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "blob".to_string());
            let mime_type = content_type.unwrap_or_else(|| guess_mime_type(&file).to_string());

            tracing::info!(base_url = client.base_url(), file = %file.display(), "Uploading");

            let uploader = Uploader::new(Arc::new(client), Arc::new(CommandLinePicker));
            uploader.click();
            uploader
                .select_file(SelectedFile::new(name, mime_type, bytes))
                .await
                .context("Upload task panicked")?;

            let outcome = UploadOutcome::from_state(&uploader.state());
            print_json(&outcome)?;

            if !outcome.success {
                anyhow::bail!(
                    "Upload failed: {}",
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    Ok(())
}
