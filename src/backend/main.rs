/**
 * kdt Server Entry Point
 *
 * Starts the single HTTP listener that serves the kdt sandbox, ginipet
 * accounts and the greenmarket marketplace.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use kdt_server::backend::server::create_app;
    use kdt_server::shared::GatewayConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin kdt-server --features ssr");
    std::process::exit(1);
}
