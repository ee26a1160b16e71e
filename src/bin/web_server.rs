use dijkstra_graph::web::{start_server, ServerConfig};
use log::warn;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let mut config = ServerConfig::default();
    if let Some(arg) = env::args().nth(1) {
        match arg.parse() {
            Ok(port) => config.port = port,
            Err(_) => warn!("Ignoring invalid port {:?}, using {}", arg, config.port),
        }
    }

    println!("Starting path query server...");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);

    start_server(config).await?;

    Ok(())
}
