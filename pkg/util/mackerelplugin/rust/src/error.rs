// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("failed to fetch metrics: {0}")]
    Fetch(String),

    #[error("failed to write plugin output")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize graph definitions")]
    Definitions(#[source] serde_json::Error),

    #[error("failed to read state file {}", path.display())]
    StateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file {}", path.display())]
    StateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write state file {}", path.display())]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot compute diff for {metric}: {reason}")]
    Diff { metric: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, PluginError>;
