// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use log::debug;

use crate::errors::{Error, Result};
use crate::metrics::SQS_METRICS;
use crate::source::{DataPoint, StatisticsQuery, StatisticsSource};

/// A metric that could not be reported this run.
#[derive(Debug)]
pub struct MetricFailure {
    pub metric: &'static str,
    pub error: Error,
}

/// Outcome of one fetch: what was collected and what was skipped.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub values: HashMap<String, f64>,
    pub failures: Vec<MetricFailure>,
}

/// Pick the most recent data point.
///
/// When several points share the latest timestamp the one that comes last in
/// `points` wins, so the result only depends on the response order.
pub fn latest_point(points: &[DataPoint]) -> Option<&DataPoint> {
    points.iter().max_by_key(|p| p.timestamp)
}

pub struct SqsFetcher {
    source: Arc<dyn StatisticsSource>,
    queue_name: String,
}

impl SqsFetcher {
    pub fn new(source: Arc<dyn StatisticsSource>, queue_name: &str) -> Self {
        Self {
            source,
            queue_name: queue_name.to_string(),
        }
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    pub async fn fetch(&self) -> FetchReport {
        self.fetch_at(SystemTime::now()).await
    }

    /// Query every SQS metric once, sequentially, with windows ending at `now`.
    pub async fn fetch_at(&self, now: SystemTime) -> FetchReport {
        let mut report = FetchReport::default();

        for metric in SQS_METRICS {
            match self.last_value(metric, now).await {
                Ok(value) => {
                    debug!("{metric}: {value}");
                    report.values.insert(metric.to_string(), value);
                }
                Err(error) => report.failures.push(MetricFailure { metric, error }),
            }
        }

        report
    }

    async fn last_value(&self, metric: &str, now: SystemTime) -> Result<f64> {
        let query = StatisticsQuery::for_queue(metric, &self.queue_name, now);
        let points = self.source.get_statistics(&query).await?;

        latest_point(&points)
            .map(|p| p.value)
            .ok_or_else(|| Error::NoData {
                metric: metric.to_string(),
            })
    }
}
