//! Schema and resolvers.
//!
//! The two query fields are thin adapters over the upstream clients: they
//! pass arguments through and let failures surface as GraphQL errors. The
//! clients live in the schema's context data and are shared across
//! concurrent requests.

use crate::upstream::{DeepseekClient, PokeApiClient, Pokemon};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};

pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Looks up a pokemon by id (numeric or name, upstream decides).
    async fn pokemon(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Pokemon>> {
        let client = ctx.data::<PokeApiClient>()?;
        let pokemon = client.fetch_pokemon(&id).await?;
        Ok(Some(pokemon))
    }

    /// Single-turn chat completion; the answer (or a fallback string) is
    /// returned as-is.
    async fn ask_deepseek(&self, ctx: &Context<'_>, prompt: String) -> Result<Option<String>> {
        let client = ctx.data::<DeepseekClient>()?;
        let answer = client.ask(&prompt).await?;
        Ok(Some(answer))
    }
}

pub fn build_schema(pokeapi: PokeApiClient, deepseek: DeepseekClient) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(pokeapi)
        .data(deepseek)
        .finish()
}
