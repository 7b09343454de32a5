use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::GenerationError;
use crate::generator::{GenerationConfig, Generator};

/// Inbound invocation payload.
///
/// Absent and `null` fields decode to their zero value. Nothing is range
/// checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Request {
    #[serde(deserialize_with = "null_as_default")]
    pub target_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emoji_num: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub punctuation_level: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    pub message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<Request> for GenerationConfig {
    fn from(request: Request) -> Self {
        Self {
            target_name: request.target_name,
            emoji_num: request.emoji_num,
            punctuation_level: request.punctuation_level,
        }
    }
}

/// Maps `request` onto a [`GenerationConfig`] and calls the generator once.
///
/// The generator's error is returned as is.
pub fn handle<G>(generator: &G, request: Request) -> Result<Response, GenerationError>
where
    G: Generator + ?Sized,
{
    let config = GenerationConfig::from(request);
    let message = generator.start(&config)?;
    Ok(Response { message })
}
