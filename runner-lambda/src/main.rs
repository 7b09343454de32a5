use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use ojisan_core::config::load_config;
use ojisan_core::telemetry::init_tracing;
use ojisan_core::{Generator, Request, Response, TemplateGenerator};
use tracing::{error, info};

/// Path to a YAML config file. Takes precedence over `OJISAN_CONFIG`.
const CONFIG_PATH_ENV: &str = "OJISAN_CONFIG_PATH";

pub async fn lambda_handler<G>(generator: &G, event: LambdaEvent<Request>) -> Result<Response, Error>
where
    G: Generator + ?Sized,
{
    let (request, context) = event.into_parts();
    let request_id = context.request_id;
    info!(
        %request_id,
        target_name = %request.target_name,
        emoji_num = request.emoji_num,
        punctuation_level = request.punctuation_level,
        "Invocation received"
    );

    match ojisan_core::handle(generator, request) {
        Ok(response) => {
            info!(%request_id, "Message generated");
            Ok(response)
        }
        Err(e) => {
            error!(%request_id, error = %e, "Message generation failed");
            // boxed as is, so the invocation's errorMessage is the engine's text
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let generator = TemplateGenerator::new(config.generator);
    info!("Generator ready, waiting for invocations");

    let generator = &generator;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Request>| {
        lambda_handler(generator, event)
    }))
    .await
}
