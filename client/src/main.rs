use clap::Parser;
use client::Bootstrapper;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Page address the client was served from
    #[arg(default_value = "http://localhost:8080/")]
    page: String,
    /// Silence the per-packet debug trace
    #[arg(long)]
    quiet_packets: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let boot = Bootstrapper::from_page(&cli.page, !cli.quiet_packets)?;
    let (tx, mut rx) = mpsc::channel(16);
    tokio::spawn(async move { while rx.recv().await.is_some() {} });
    boot.run(tx).await?;
    Ok(())
}
