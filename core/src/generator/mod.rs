pub mod template;

use crate::errors::GenerationError;

/// The engine-facing settings for one generated message.
///
/// Values are carried as received; bounds checking, if any, is up to the
/// [`Generator`] that consumes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Who the message addresses.
    pub target_name: String,
    /// How many emojis to decorate the message with.
    pub emoji_num: i64,
    /// How heavily to punctuate.
    pub punctuation_level: i64,
}

/// A text-generation engine that turns a [`GenerationConfig`] into a
/// single message.
///
/// Implementations must be shareable across invocations without locking,
/// so `start` takes `&self`.
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    fn start(&self, config: &GenerationConfig) -> Result<String, GenerationError>;
}
