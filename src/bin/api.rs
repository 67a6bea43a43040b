use hello_fn::api::handler;
use hello_fn::app;
use hello_fn::core::config::AppConfig;
use lambda_http::{Error, Request, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    hello_fn::setup_logging();

    // One-time setup; nothing below is rebuilt per invocation.
    let config = AppConfig::from_env()?;
    let router = app::router();
    tracing::info!(
        function = %config.function_name,
        version = %config.function_version,
        "Function initialized"
    );

    run(service_fn(move |request: Request| {
        handler(router.clone(), request)
    }))
    .await
}
