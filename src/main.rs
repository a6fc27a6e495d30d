use crate::config::Config;
use crate::errors::HarvestError;
use crate::invocation::{handle_invocation, InvocationEvent};
use crate::router::{handle, is_client_error, App};
use crate::scraper::HttpFetcher;
use astra::Server;
use chrono::Utc;
use std::io::Read;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod errors;
mod invocation;
mod responses;
mod router;
mod scraper;
mod storage;

#[cfg(test)]
mod tests;

fn main() {
    // Logs go to stderr; stdout carries the invocation response
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,zameen_harvest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let mode = std::env::args().nth(1).unwrap_or_else(|| "invoke".to_string());
    let result = match mode.as_str() {
        "invoke" => invoke_from_stdin(&config),
        "serve" => serve(&config),
        other => Err(HarvestError::InvalidInput(format!(
            "unknown mode `{other}` (expected `invoke` or `serve`)"
        ))),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Reads one event from stdin and prints the response to stdout.
fn invoke_from_stdin(config: &Config) -> Result<(), HarvestError> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| HarvestError::InvalidInput(format!("reading event failed: {e}")))?;

    let event: InvocationEvent = if raw.trim().is_empty() {
        InvocationEvent::default()
    } else {
        serde_json::from_str(&raw)
            .map_err(|e| HarvestError::InvalidInput(format!("malformed event: {e}")))?
    };

    let fetcher = HttpFetcher::new()?;
    let store = config.object_store()?;

    let response = handle_invocation(
        &event,
        &fetcher,
        store.as_ref(),
        &config.bucket_name,
        Utc::now(),
    )?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn serve(config: &Config) -> Result<(), HarvestError> {
    let app = App {
        bucket: config.bucket_name.clone(),
        fetcher: Box::new(HttpFetcher::new()?),
        store: config.object_store()?,
    };

    info!(addr = %config.bind_addr, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(8);

    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if is_client_error(&err) {
                    warn!("request rejected: {err}");
                } else {
                    error!("invocation failed: {err}");
                }
                responses::error_to_response(err)
            }
        })
        .map_err(|e| HarvestError::Internal(format!("server ended with error: {e}")))?;

    info!("server shut down cleanly");
    Ok(())
}
