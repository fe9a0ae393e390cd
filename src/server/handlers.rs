use crate::graphql::GatewaySchema;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

pub async fn graphql(
    State(schema): State<GatewaySchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Interactive explorer, pre-populated with the two sample queries.
pub async fn explorer() -> Html<&'static str> {
    Html(include_str!("../../assets/graphiql.html"))
}
