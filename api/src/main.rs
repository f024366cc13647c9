use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use otp_api::app::configure_api;
use otp_api::middleware::cors::create_cors;
use otp_api::middleware::rate_limit::RateLimiter;
use otp_api::state::AppState;
use otp_core::services::metrics::MetricsRecorder;
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_infra::cache::{RedisClient, RedisOtpStore};
use otp_infra::partner::PartnerClient;
use otp_infra::InfrastructureError;
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_logger(&config);

    info!("starting OTP service");

    // Fail fast on an unreachable store; nothing works without it.
    let redis = RedisClient::connect(&config.cache).await.map_err(to_io_error)?;
    redis.ping().await.map_err(to_io_error)?;

    let store = Arc::new(RedisOtpStore::new(redis));
    let partner = Arc::new(PartnerClient::new(config.partner.clone()).map_err(to_io_error)?);
    let metrics = MetricsRecorder::new(Arc::clone(&store));
    let service = Arc::new(OtpService::new(
        Arc::clone(&store),
        partner,
        metrics,
        OtpServiceConfig::from(&config.otp),
    ));
    let state = web::Data::new(AppState { otp: service });

    // The per-IP limiter opens its own connections lazily.
    let limiter_client = Arc::new(
        redis::Client::open(config.cache.url())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
    );
    let rate_limit = config.rate_limit.clone();

    let bind_address = config.server.bind_address();
    info!("binding to {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(RateLimiter::new(
                Arc::clone(&limiter_client),
                rate_limit.clone(),
            ))
            .app_data(state.clone())
            .configure(configure_api::<RedisOtpStore, PartnerClient, RedisOtpStore>)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// Initialize env_logger, honouring the debug flag and the optional log
/// file destination.
fn init_logger(config: &AppConfig) {
    let default_filter = if config.server.debug { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(default_filter));

    if let Some(path) = &config.logging.file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("cannot open log file {}: {}; logging to stderr", path, e);
            }
        }
    }

    builder.init();
}

fn to_io_error(error: InfrastructureError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
