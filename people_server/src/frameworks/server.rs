use crate::frameworks::config;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, InMemoryPeopleService};
use std::sync::Arc;
use tokio::net::TcpListener;

// Request logs from this crate at info, framework internals only when they warn.
const DEFAULT_LOG_FILTER: &str = "people_server=info,axum=warn,tower=warn";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => subscriber
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .init(),
        _ => subscriber.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let location = info.location().map(|l| format!("{}:{}", l.file(), l.line()));
        tracing::error!(%info, ?location, ?backtrace, "panic while serving people api");
    }));
}

// Serve the people API on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let credentials = match config::credentials() {
        Ok(credentials) => credentials,
        Err(error) => {
            tracing::error!(%error, "failed to load credentials");
            return;
        }
    };

    let state = AppState {
        people: Arc::new(InMemoryPeopleService::default()),
        credentials: Arc::new(credentials),
    };

    let addr = config::server_addr();

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return;
        }
    };
    tracing::info!(%addr, "listening");

    if let Err(error) = serve(listener, state).await {
        tracing::error!(%error, "server error");
    }
}
