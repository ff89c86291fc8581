//! Download a URL into a directory, showing progress.
//!
//! cargo run --example fetch -- <url> "<display name>" [directory]

use color_eyre::{eyre::eyre, Result};
use console::style;
use streamsave::{ControllerBuilder, DirectoryTarget, Status};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let url = args.next().ok_or_else(|| eyre!("missing <url>"))?;
    let name = args.next().unwrap_or_else(|| "download".to_string());
    let directory = args.next().unwrap_or_else(|| "downloads".to_string());

    // Keep the offered payload so the write can be awaited before exiting.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = ControllerBuilder::new()
        .save_target(move |filename: &str, payload: Vec<u8>| {
            let _ = tx.send((filename.to_string(), payload));
        })
        .build();
    let summary = controller.start(&url, &name).await;

    match summary.status() {
        Status::Success => {
            let (filename, payload) = rx
                .recv()
                .await
                .ok_or_else(|| eyre!("payload was never offered"))?;
            let path = DirectoryTarget::new(&directory)
                .save(&filename, &payload)
                .await?;
            println!(
                "{} {} ({} bytes)",
                style("Saved").green().bold(),
                path.display(),
                summary.size()
            );
        }
        Status::Fail(reason) => println!("{} {}", style("Failed").red().bold(), reason),
        Status::Cancelled => println!("{}", style("Cancelled").yellow()),
    }

    Ok(())
}
