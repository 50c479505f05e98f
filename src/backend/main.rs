/**
 * IssueHub Server Entry Point
 *
 * Binary entry point for the IssueHub backend server. Loads settings,
 * opens the database, and serves the API over HTTP.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Starting IssueHub backend");

    let settings = issuehub::backend::server::config::Settings::from_env();
    let port = settings.server_port;

    let app = issuehub::backend::server::init::create_app(&settings).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
