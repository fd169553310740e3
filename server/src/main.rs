use clap::Parser;
use server::{app, init_logging, AppState};
use std::{net::SocketAddr, sync::Arc};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: String,
    /// Directory of static files served to browsers
    #[arg(long, default_value = "server/static")]
    static_dir: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (log_tx, log_rx) = broadcast::channel(256);
    init_logging(log_tx);

    let state = AppState {
        logs: Arc::new(log_rx),
    };
    let app = app(state, &cli.static_dir);

    let addr: SocketAddr = cli.addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Resolves when `stop` is typed on the console or the process receives
/// Ctrl-C.
async fn shutdown_signal() {
    let console = async {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().eq_ignore_ascii_case("stop") => return,
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    error!("Error reading console input: {}", e);
                    break;
                }
            }
        }
        // Console is gone; stay up until Ctrl-C.
        std::future::pending::<()>().await;
    };
    tokio::select! {
        _ = console => {}
        _ = tokio::signal::ctrl_c() => {}
    }
}
