/**
 * Inkpost Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the blog API.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = match inkpost::backend::server::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[STARTUP] Invalid configuration ({}); using defaults", e);
            inkpost::shared::AppConfig::default()
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    tracing::warn!(
        "Authentication is mocked and passwords are stored in plain text; do not expose this server publicly"
    );

    let addr = config.bind_addr;
    let app = inkpost::backend::server::create_app();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin inkpost-server --features ssr");
    std::process::exit(1);
}
