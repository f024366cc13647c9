//! Per-IP rate limiting for the OTP request endpoint
//!
//! A Redis counter per client IP, incremented on every `POST
//! /api/otp/request` and expired after the window. This is the generic
//! outer throttle; the per-phone cooldown lives in the OTP engine. The
//! limiter fails closed: when the counter store is unreachable no OTP
//! requests pass, matching the rest of the service's stance on store
//! outages.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use redis::AsyncCommands;

use otp_shared::config::RateLimitConfig;
use otp_shared::types::response::ErrorBody;

const LIMITED_PATH: &str = "/api/otp/request";

/// Rate limiter middleware factory.
pub struct RateLimiter {
    client: Arc<redis::Client>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(client: Arc<redis::Client>, config: RateLimitConfig) -> Self {
        Self { client, config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            client: Arc::clone(&self.client),
            config: self.config.clone(),
        }))
    }
}

pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    client: Arc<redis::Client>,
    config: RateLimitConfig,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let client = Arc::clone(&self.client);
        let config = self.config.clone();

        Box::pin(async move {
            if req.path() != LIMITED_PATH || req.method() != Method::POST {
                return service.call(req).await.map(|res| res.map_into_left_body());
            }

            let ip = client_ip(&req);
            match check_ip_limit(&client, &ip, &config).await {
                Ok(true) => service.call(req).await.map(|res| res.map_into_left_body()),
                Ok(false) => {
                    log::warn!("per-IP rate limit exceeded for {}", ip);
                    let response = HttpResponse::TooManyRequests().json(ErrorBody::new(
                        "RATE_LIMITED",
                        "Too many requests. Please try again later",
                    ));
                    Ok(req.into_response(response).map_into_right_body())
                }
                Err(e) => {
                    log::error!("rate limit check failed for {}: {}", ip, e);
                    let response = HttpResponse::InternalServerError().json(ErrorBody::new(
                        "INTERNAL_ERROR",
                        "Internal error. Please try again later",
                    ));
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Increment the caller's window counter; `false` once over the limit.
async fn check_ip_limit(
    client: &redis::Client,
    ip: &str,
    config: &RateLimitConfig,
) -> Result<bool, redis::RedisError> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let key = format!("rate_limit:ip:{}", ip);

    let count: i64 = conn.incr(&key, 1).await?;
    if count == 1 {
        conn.expire::<_, ()>(&key, config.window_secs as i64).await?;
    }

    Ok(count <= i64::from(config.requests_per_window))
}

/// Resolve the client IP, honouring reverse-proxy headers.
fn client_ip(req: &ServiceRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded) = forwarded_for.to_str() {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip) = real_ip.to_str() {
            return ip.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
