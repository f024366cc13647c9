//! Daily OTP usage metrics
//!
//! Three monotonically increasing counters per calendar date (service-local
//! clock): `total`, `success`, `failed`. Counters live in the shared store so
//! every instance of the service sees the same numbers; they are never
//! explicitly deleted and are expected to be rotated externally.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// The three counters tracked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricCounter {
    Total,
    Success,
    Failed,
}

impl MetricCounter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Storage seam for the daily counters.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Atomically increment a counter, creating it at zero first if absent.
    async fn incr_metric(&self, date: &str, counter: MetricCounter) -> Result<i64, String>;

    /// Read a counter, zero when unset.
    async fn read_metric(&self, date: &str, counter: MetricCounter) -> Result<u64, String>;
}

/// Counters for a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub date: String,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

/// Records request outcomes and reads back today's counters.
pub struct MetricsRecorder<M: MetricsStore> {
    store: Arc<M>,
}

impl<M: MetricsStore> Clone for MetricsRecorder<M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<M: MetricsStore> MetricsRecorder<M> {
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    fn today() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    /// Count one taken OTP request: `total` plus exactly one of
    /// `success`/`failed`. The two increments are independent store
    /// operations, so a crash in between can skew the split by one; the
    /// counters are telemetry, not billing.
    pub async fn record(&self, success: bool) -> DomainResult<()> {
        let date = Self::today();

        self.store
            .incr_metric(&date, MetricCounter::Total)
            .await
            .map_err(DomainError::store)?;

        let outcome = if success {
            MetricCounter::Success
        } else {
            MetricCounter::Failed
        };
        self.store
            .incr_metric(&date, outcome)
            .await
            .map_err(DomainError::store)?;

        Ok(())
    }

    /// Read today's counters, defaulting to zero.
    pub async fn read_today(&self) -> DomainResult<DailyMetrics> {
        let date = Self::today();

        let total = self
            .store
            .read_metric(&date, MetricCounter::Total)
            .await
            .map_err(DomainError::store)?;
        let success = self
            .store
            .read_metric(&date, MetricCounter::Success)
            .await
            .map_err(DomainError::store)?;
        let failed = self
            .store
            .read_metric(&date, MetricCounter::Failed)
            .await
            .map_err(DomainError::store)?;

        Ok(DailyMetrics {
            date,
            total,
            success,
            failed,
        })
    }
}
