pub mod handlers;

use crate::{
    config::Config,
    graphql::{self, GatewaySchema},
    upstream::{DeepseekClient, PokeApiClient},
    Result,
};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(schema: GatewaySchema) -> Router {
    Router::new()
        .route("/", get(handlers::explorer).post(handlers::graphql))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

pub async fn run(config: Config) -> Result<()> {
    let pokeapi = PokeApiClient::new(config.pokeapi.clone());
    let deepseek = DeepseekClient::new(config.deepseek.clone());
    let schema = graphql::build_schema(pokeapi, deepseek);

    let app = router(schema);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting GraphQL gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
