use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use signup_shared::{handle_pre_signup_json, RuntimeConfig};
use tracing::info;

async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    info!("Request ID: {}", context.request_id);

    Ok(handle_pre_signup_json(payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = RuntimeConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .without_time()
        .init();

    info!("Starting {} Lambda", config.function_name());

    run(service_fn(function_handler)).await
}
