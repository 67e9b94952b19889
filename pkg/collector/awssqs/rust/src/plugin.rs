// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use async_trait::async_trait;
use log::warn;
use mackerel_plugin::{GraphDefinition, MetricValues, Plugin};

use crate::fetcher::SqsFetcher;
use crate::schema::graph_definition;

/// Adapts [`SqsFetcher`] to the mackerel-agent plugin protocol.
pub struct SqsPlugin {
    fetcher: SqsFetcher,
}

impl SqsPlugin {
    pub fn new(fetcher: SqsFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Plugin for SqsPlugin {
    /// Skipped metrics are logged and left out of the output.
    async fn fetch_metrics(&self) -> mackerel_plugin::Result<MetricValues> {
        let report = self.fetcher.fetch().await;
        for failure in &report.failures {
            warn!(
                "{}: {} (queue {})",
                failure.metric,
                failure.error,
                self.fetcher.queue_name()
            );
        }
        Ok(report.values)
    }

    fn graph_definition(&self) -> &GraphDefinition {
        graph_definition()
    }
}
