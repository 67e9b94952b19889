// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Port for the monitoring API the fetcher reads statistics from.

use std::time::{Duration, SystemTime};

use async_trait::async_trait;

use crate::errors::Result;
use crate::metrics::{LOOKBACK, NAMESPACE, PERIOD, QUEUE_DIMENSION, Statistic};

/// One statistics request for a single metric of a single queue.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub namespace: &'static str,
    pub metric_name: String,
    pub dimension_name: &'static str,
    pub dimension_value: String,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
    pub period: Duration,
    pub statistic: Statistic,
}

impl StatisticsQuery {
    /// Query for `metric` of `queue_name` over the lookback window ending at `now`.
    pub fn for_queue(metric: &str, queue_name: &str, now: SystemTime) -> Self {
        Self {
            namespace: NAMESPACE,
            metric_name: metric.to_string(),
            dimension_name: QUEUE_DIMENSION,
            dimension_value: queue_name.to_string(),
            start_time: now.checked_sub(LOOKBACK).unwrap_or(SystemTime::UNIX_EPOCH),
            end_time: now,
            period: PERIOD,
            statistic: Statistic::for_metric(metric),
        }
    }
}

/// A pre-aggregated observation, already reduced to the requested statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub timestamp: SystemTime,
    pub value: f64,
}

#[async_trait]
pub trait StatisticsSource: Send + Sync {
    /// Data points in the order the API returned them.
    async fn get_statistics(&self, query: &StatisticsQuery) -> Result<Vec<DataPoint>>;
}
