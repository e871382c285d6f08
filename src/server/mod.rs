pub mod handlers;
pub mod types;

use crate::{
    Result,
    api_docs::ApiDoc,
    config::Config,
    llm::{ChatClient, OpenAiClient},
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub async fn run(config: Config) -> Result<()> {
    // A bad LLM configuration must abort startup, not the first request
    let chat: Arc<dyn ChatClient> = Arc::new(OpenAiClient::new(config.llm.clone())?);

    let app = router(chat);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router around an injected chat client.
pub fn router(chat: Arc<dyn ChatClient>) -> Router {
    let app_state = handlers::AppState { chat };

    Router::new()
        .route("/chat", get(handlers::generate))
        .with_state(app_state)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
