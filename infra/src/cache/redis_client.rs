//! Async Redis client
//!
//! Thin wrapper over a multiplexed connection exposing exactly the
//! primitives the service needs: SETEX, SET NX EX, GET, DEL, EXISTS, INCR
//! and PING. Each operation is a single attempt; the store is the source of
//! truth for all request state, so a failure is surfaced to the caller
//! instead of retried here.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::{debug, error, info};

use otp_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Shared async Redis client.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Connect using the cache configuration.
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let url = config.url();
        info!("connecting to Redis at {}", mask_url(&url));

        let client = Client::open(url.as_str()).map_err(|e| {
            error!("invalid Redis URL: {}", e);
            InfrastructureError::Config(format!("invalid Redis URL: {}", e))
        })?;

        let connection = client.get_multiplexed_async_connection().await?;

        info!("Redis connection established");
        Ok(Self { connection })
    }

    /// SETEX: store a value with an expiry, overwriting any previous value.
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_secs: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("SETEX {} ({}s)", key, expiry_secs);
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_secs).await?;
        Ok(())
    }

    /// SET NX EX: claim a key atomically. Returns `false` when the key
    /// already exists.
    pub async fn set_if_absent_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_secs: u64,
    ) -> Result<bool, InfrastructureError> {
        debug!("SET {} NX EX {}", key, expiry_secs);
        let mut conn = self.connection.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(expiry_secs)
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("GET {}", key);
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// DEL: returns `true` when the key existed.
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("DEL {}", key);
        let mut conn = self.connection.clone();
        let deleted: u32 = conn.del(key).await?;
        Ok(deleted > 0)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("EXISTS {}", key);
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    /// INCR, attaching an expiry on first write when requested.
    pub async fn increment(
        &self,
        key: &str,
        expiry_secs: Option<u64>,
    ) -> Result<i64, InfrastructureError> {
        debug!("INCR {}", key);
        let mut conn = self.connection.clone();
        let count: i64 = conn.incr(key, 1).await?;
        if count == 1 {
            if let Some(ttl) = expiry_secs {
                conn.expire::<_, ()>(key, ttl as i64).await?;
            }
        }
        Ok(count)
    }

    /// PING, used at startup to fail fast on a misconfigured store.
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(InfrastructureError::Config(format!(
                "unexpected PING reply: {}",
                reply
            )))
        }
    }
}

/// Hide credentials when logging connection URLs.
fn mask_url(url: &str) -> String {
    match (url.find("://"), url.find('@')) {
        (Some(proto_end), Some(at_pos)) if proto_end + 3 < at_pos => {
            format!("{}****{}", &url[..proto_end + 3], &url[at_pos..])
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_url_hides_password() {
        assert_eq!(
            mask_url("redis://:secret@localhost:6379/0"),
            "redis://****@localhost:6379/0"
        );
    }

    #[test]
    fn test_mask_url_passthrough_without_credentials() {
        assert_eq!(mask_url("redis://localhost:6379/0"), "redis://localhost:6379/0");
    }
}
