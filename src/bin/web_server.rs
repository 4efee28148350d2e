use dial_sssp::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [max_sessions]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = args
        .get(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults.port);
    let max_sessions = args
        .get(2)
        .and_then(|m| m.parse().ok())
        .unwrap_or(defaults.max_sessions);

    let config = ServerConfig {
        port,
        max_sessions,
        ..defaults
    };

    println!("Starting shortest path web service");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);

    start_server(config).await?;

    Ok(())
}
