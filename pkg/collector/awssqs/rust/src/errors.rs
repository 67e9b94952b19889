// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Region, credential or client setup failed. Nothing was fetched.
    #[error("could not connect to CloudWatch: {0}")]
    Connection(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The query succeeded but returned no usable data point.
    #[error("fetched no datapoints for {metric}")]
    NoData { metric: String },

    #[error("query for {metric} failed: {message}")]
    Query { metric: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
