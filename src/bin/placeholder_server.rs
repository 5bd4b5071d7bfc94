use anyhow::{Context, Result};
use clap::Parser;
use enum_export::server::{self, AppState, DEFAULT_BIND};

#[derive(Parser)]
#[command(name = "placeholder-server")]
#[command(about = "Static health responder that holds the backend port during startup")]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = DEFAULT_BIND)]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let server_ip = server::resolve_server_ip();
    let app = server::router(AppState { server_ip });

    let listener = tokio::net::TcpListener::bind(cli.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    let port = listener.local_addr()?.port();

    tracing::info!("Test server running on http://{}", cli.bind);
    println!("Try: http://{}:{}/api/health", server_ip, port);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
