pub mod adapter;
pub mod config;
pub mod errors;
pub mod generator;
pub mod telemetry;

pub use adapter::{handle, Request, Response};
pub use config::OjisanConfig;
pub use errors::{GenerationError, OjisanError, Result};
pub use generator::template::TemplateGenerator;
pub use generator::{GenerationConfig, Generator};
