// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! The SQS metrics this plugin reports and how each one is queried.

use std::fmt;
use std::time::Duration;

pub const NAMESPACE: &str = "AWS/SQS";
pub const QUEUE_DIMENSION: &str = "QueueName";

/// Granularity of the requested data points.
pub const PERIOD: Duration = Duration::from_secs(60);

/// Three periods back so that at least one flushed data point is in range.
pub const LOOKBACK: Duration = Duration::from_secs(180);

/// Queried in this order on every run.
pub const SQS_METRICS: [&str; 8] = [
    "NumberOfMessagesSent",
    "SentMessageSize",
    "NumberOfMessagesReceived",
    "NumberOfEmptyReceives",
    "NumberOfMessagesDeleted",
    "ApproximateNumberOfMessagesDelayed",
    "ApproximateNumberOfMessagesVisible",
    "ApproximateNumberOfMessagesNotVisible",
];

const GAUGE_PREFIX: &str = "Approximate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Sum,
    Average,
}

impl Statistic {
    /// `Approximate*` metrics are queue-depth gauges and are averaged over the
    /// period; everything else is a counter and is summed.
    pub fn for_metric(metric: &str) -> Self {
        if metric.starts_with(GAUGE_PREFIX) {
            Statistic::Average
        } else {
            Statistic::Sum
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Sum => "Sum",
            Statistic::Average => "Average",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
