// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Correctness
#![deny(clippy::cast_possible_wrap)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod cli;
mod cloudwatch;
pub mod config;
mod errors;
mod fetcher;
mod metrics;
mod plugin;
mod schema;
mod source;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cloudwatch::CloudWatchSource;
pub use errors::{Error, Result};
pub use fetcher::{FetchReport, MetricFailure, SqsFetcher, latest_point};
pub use metrics::{SQS_METRICS, Statistic};
pub use plugin::SqsPlugin;
pub use schema::graph_definition;
pub use source::{DataPoint, StatisticsQuery, StatisticsSource};
