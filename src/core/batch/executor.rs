//! End-to-end batch operation

use super::aggregator::aggregate;
use super::builder::build;
use super::normalizer::normalize;
use super::parser::parse_bytes;
use super::types::{BatchParseError, BatchSpec, SubRequestSpec, SubResponseValue};
use crate::config::BatchConfig;
use crate::core::router::Dispatch;
use crate::utils::error::{GatewayError, Result};
use futures::future;
use futures::stream::{self, TryStreamExt};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runs batches against a router.
///
/// With the default concurrency of 1, sub-requests run strictly in order,
/// each finishing before the next starts. With a higher concurrency up to
/// that many run at once; results are still stored by index, and the first
/// failure drops every sibling still in flight.
#[derive(Debug, Clone)]
pub struct BatchExecutor {
    concurrency: usize,
    max_requests: Option<usize>,
    sub_request_timeout: Option<Duration>,
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self {
            concurrency: 1,
            max_requests: None,
            sub_request_timeout: None,
        }
    }
}

impl BatchExecutor {
    /// Create an executor from configuration
    pub fn new(config: &BatchConfig) -> Self {
        Self {
            concurrency: config.concurrency.max(1),
            max_requests: config.max_requests,
            sub_request_timeout: config.sub_request_timeout_ms.map(Duration::from_millis),
        }
    }

    /// Set the number of sub-requests allowed in flight at once
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Reject batches with more sub-requests than `limit`
    pub fn with_max_requests(mut self, limit: usize) -> Self {
        self.max_requests = Some(limit);
        self
    }

    /// Fail a sub-request (and so the batch) that takes longer than `timeout`
    pub fn with_sub_request_timeout(mut self, timeout: Duration) -> Self {
        self.sub_request_timeout = Some(timeout);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Parse a raw batch body, dispatch every sub-request and aggregate the
    /// results into `{"responses": [...]}`.
    pub async fn run<D>(&self, body: &[u8], dispatcher: &D) -> Result<Value>
    where
        D: Dispatch + ?Sized,
    {
        let spec = parse_bytes(body)?;
        let values = self.execute(spec, dispatcher).await?;
        Ok(aggregate(values))
    }

    /// Dispatch every sub-request of a parsed batch.
    ///
    /// The returned values are in spec order. Nothing is dispatched if the
    /// batch is over the configured size limit.
    pub async fn execute<D>(
        &self,
        spec: BatchSpec,
        dispatcher: &D,
    ) -> Result<Vec<SubResponseValue>>
    where
        D: Dispatch + ?Sized,
    {
        if let Some(limit) = self.max_requests {
            if spec.len() > limit {
                return Err(BatchParseError::TooManyRequests {
                    count: spec.len(),
                    limit,
                }
                .into());
            }
        }

        let total = spec.len();
        debug!(total, concurrency = self.concurrency, "Dispatching batch");

        let values = if self.concurrency == 1 || total <= 1 {
            self.execute_sequential(spec, dispatcher).await?
        } else {
            self.execute_concurrent(spec, dispatcher).await?
        };

        info!(total, "Batch completed");
        Ok(values)
    }

    async fn execute_sequential<D>(
        &self,
        spec: BatchSpec,
        dispatcher: &D,
    ) -> Result<Vec<SubResponseValue>>
    where
        D: Dispatch + ?Sized,
    {
        let mut values = Vec::with_capacity(spec.len());
        for (index, sub_request) in spec.requests.into_iter().enumerate() {
            values.push(self.dispatch_one(index, sub_request, dispatcher).await?);
        }
        Ok(values)
    }

    async fn execute_concurrent<D>(
        &self,
        spec: BatchSpec,
        dispatcher: &D,
    ) -> Result<Vec<SubResponseValue>>
    where
        D: Dispatch + ?Sized,
    {
        let mut slots: Vec<Option<SubResponseValue>> = vec![None; spec.len()];

        // Returning early drops the stream, and with it every in-flight sibling
        stream::iter(
            spec.requests
                .into_iter()
                .enumerate()
                .map(Ok::<_, GatewayError>),
        )
        .map_ok(|(index, sub_request)| async move {
            let value = self.dispatch_one(index, sub_request, dispatcher).await?;
            Ok::<_, GatewayError>((index, value))
        })
        .try_buffer_unordered(self.concurrency)
        .try_for_each(|(index, value)| {
            slots[index] = Some(value);
            future::ready(Ok(()))
        })
        .await?;

        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| GatewayError::internal("Batch finished with an unfilled result slot"))
    }

    async fn dispatch_one<D>(
        &self,
        index: usize,
        sub_request: SubRequestSpec,
        dispatcher: &D,
    ) -> Result<SubResponseValue>
    where
        D: Dispatch + ?Sized,
    {
        debug!(
            index,
            method = %sub_request.method,
            uri = %sub_request.uri,
            "Dispatching sub-request"
        );

        let request = build(sub_request);
        let outcome = match self.sub_request_timeout {
            Some(limit) => tokio::time::timeout(limit, dispatcher.dispatch(request))
                .await
                .map_err(|_| {
                    GatewayError::timeout(format!("Sub-request timed out after {:?}", limit))
                })?,
            None => dispatcher.dispatch(request).await,
        };

        match outcome {
            Ok(response) => Ok(normalize(response)),
            Err(e) => {
                warn!(index, error = %e, "Sub-request failed, aborting batch");
                Err(e)
            }
        }
    }
}
