mod deepseek;
mod pokeapi;

pub use deepseek::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    DeepseekClient, INSUFFICIENT_BALANCE_REPLY, NO_ANSWER_REPLY,
};
pub use pokeapi::{PokeApiClient, Pokemon, PokemonSprites};
