//! Game server: websocket echo endpoint, static hosting for the browser
//! client, and a live log stream.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

mod logging;

pub use logging::init_logging;

static INDEX_HTML: &str = include_str!("../static/index.html");

/// State shared across HTTP handlers and WebSocket tasks.
#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<broadcast::Receiver<String>>,
}

pub async fn index() -> Html<&'static str> {
    info!("index requested");
    Html(INDEX_HTML)
}

pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    info!("websocket upgrade initiated");
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    info!("websocket connected");
    while let Some(result) = socket.recv().await {
        let msg = match result {
            Ok(msg) => msg,
            Err(e) => {
                error!("WS error {}", e);
                break;
            }
        };
        debug!("{:?}", msg);
        match msg {
            Message::Text(_) | Message::Binary(_) => {
                if socket.send(msg).await.is_err() {
                    error!("failed echoing frame");
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
    info!("websocket disconnected");
}

pub async fn log_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!("log websocket upgrade initiated");
    ws.on_upgrade(move |socket| async move { handle_log_socket(socket, state).await })
}

async fn handle_log_socket(mut socket: WebSocket, state: AppState) {
    let mut logs = state.logs.resubscribe();
    while let Ok(line) = logs.recv().await {
        if socket.send(Message::Text(line.into())).await.is_err() {
            break;
        }
    }
    info!("log websocket disconnected");
}

pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .route("/log", get(log_ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
