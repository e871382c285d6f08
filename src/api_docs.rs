use crate::server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(server::handlers::generate),
    components(schemas(server::types::GenerationResponse, server::types::ErrorResponse)),
    tags(
        (name = "chat-gateway", description = "Chat gateway API")
    )
)]
pub struct ApiDoc;
