use std::io::{self, Write};
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};

#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "info";

/// Initialize logging to stdout, duplicating every line onto the provided
/// broadcast channel so `/log` subscribers can watch the server live.
pub fn init_logging(tx: broadcast::Sender<String>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(move || BroadcastWriter {
            stdout: io::stdout(),
            tx: tx.clone(),
        })
        .init();
}

/// Writer that forwards each log line to a broadcast channel as well as
/// stdout.
struct BroadcastWriter {
    stdout: io::Stdout,
    tx: broadcast::Sender<String>,
}

impl Write for BroadcastWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.stdout.write(buf)?;
        if let Ok(s) = std::str::from_utf8(buf) {
            for line in s.lines().filter(|line| !line.is_empty()) {
                let _ = self.tx.send(line.to_string());
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
