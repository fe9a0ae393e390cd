use crate::{config::PokeApiConfig, Error, Result};
use async_graphql::{ComplexObject, SimpleObject, ID};
use reqwest::header;
use serde::Deserialize;
use tracing::debug;

/// The subset of the PokeAPI pokemon resource exposed through the schema.
///
/// Deserialization is strict: a missing or null sprite URL fails the whole
/// lookup instead of defaulting, matching the non-null schema contract.
#[derive(Debug, Clone, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Pokemon {
    #[graphql(skip)]
    pub id: u32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub sprites: PokemonSprites,
}

#[ComplexObject]
impl Pokemon {
    /// Upstream sends a numeric id; the schema declares `ID!`.
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct PokemonSprites {
    pub front_default: String,
    pub front_shiny: String,
    pub front_female: String,
    pub front_shiny_female: String,
    pub back_default: String,
    pub back_shiny: String,
    pub back_female: String,
    pub back_shiny_female: String,
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
    cache_ttl_secs: u64,
}

impl PokeApiClient {
    pub fn new(config: PokeApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            cache_ttl_secs: config.cache_ttl_secs,
        }
    }

    /// Fetches a pokemon by numeric id or name, forwarded verbatim.
    pub async fn fetch_pokemon(&self, id: &str) -> Result<Pokemon> {
        debug!("Fetching pokemon: {}", id);

        let response = self
            .client
            .get(format!("{}/pokemon/{}", self.base_url, id))
            .header(
                header::CACHE_CONTROL,
                format!("max-age={}", self.cache_ttl_secs),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Pokemon>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sprites_json() -> serde_json::Value {
        json!({
            "front_default": "https://img.example/1/front_default.png",
            "front_shiny": "https://img.example/1/front_shiny.png",
            "front_female": "https://img.example/1/front_female.png",
            "front_shiny_female": "https://img.example/1/front_shiny_female.png",
            "back_default": "https://img.example/1/back_default.png",
            "back_shiny": "https://img.example/1/back_shiny.png",
            "back_female": "https://img.example/1/back_female.png",
            "back_shiny_female": "https://img.example/1/back_shiny_female.png"
        })
    }

    #[test]
    fn pokemon_deserializes_and_ignores_extra_fields() {
        let body = json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": sprites_json(),
            "abilities": [{"ability": {"name": "overgrow"}}],
            "base_experience": 64
        });

        let pokemon: Pokemon = serde_json::from_value(body).unwrap();
        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.height, 7);
        assert_eq!(pokemon.weight, 69);
        assert_eq!(
            pokemon.sprites.back_shiny_female,
            "https://img.example/1/back_shiny_female.png"
        );
    }

    #[test]
    fn null_sprite_fails_deserialization() {
        let mut sprites = sprites_json();
        sprites["front_female"] = json!(null);
        let body = json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": sprites
        });

        assert!(serde_json::from_value::<Pokemon>(body).is_err());
    }

    #[test]
    fn missing_sprite_fails_deserialization() {
        let mut sprites = sprites_json();
        sprites.as_object_mut().unwrap().remove("back_female");
        let body = json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": sprites
        });

        assert!(serde_json::from_value::<Pokemon>(body).is_err());
    }
}
