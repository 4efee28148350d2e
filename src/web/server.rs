use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

/// Builds the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_max_sessions(config.max_sessions);
    let app = create_router();

    let app = if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    };

    app.with_state(app_state)
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Shortest path service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
