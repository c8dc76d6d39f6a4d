use std::sync::Arc;

use cloudfront_redirect::{
    config::SigningConfig, router::build_redirect_router, state::RedirectState,
};
use tracing_subscriber::EnvFilter;

/// Set by the Lambda platform; its presence selects the Lambda runtime.
const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";
const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let on_lambda = std::env::var_os(LAMBDA_RUNTIME_API_VAR).is_some();
    init_tracing(on_lambda);

    let config = SigningConfig::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "refusing to start without signing configuration");
    })?;
    tracing::info!(?config, "loaded signing configuration");

    let app = build_redirect_router(Arc::new(RedirectState::new(config)));

    if on_lambda {
        lambda_http::run(app).await
    } else {
        let addr =
            std::env::var(LISTEN_ADDR_VAR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

fn init_tracing(on_lambda: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // CloudWatch stamps every line itself and does not render colors.
    if on_lambda {
        builder.without_time().with_ansi(false).init();
    } else {
        builder.init();
    }
}
