// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use aws_sqs_plugin::cli::Args;
use aws_sqs_plugin::config::ImdsRegion;
use aws_sqs_plugin::{CloudWatchSource, SqsFetcher, SqsPlugin, graph_definition};
use clap::Parser;
use log::{LevelFilter, debug};
use mackerel_plugin::{MackerelPlugin, OutputMode, write_definitions};
use simple_logger::SimpleLogger;

// stdout belongs to the plugin protocol, so nothing else may print there.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("failed to initialize logger")?;

    let args = Args::parse();
    let mode = OutputMode::from_env();
    debug!("running in {mode:?} mode");

    let mut stdout = std::io::stdout().lock();
    match mode {
        OutputMode::Definitions => write_definitions(&mut stdout, graph_definition())?,
        OutputMode::Values => {
            let identity = args.resolve_identity(&ImdsRegion).await?;
            let source = CloudWatchSource::connect(&identity).await?;
            let fetcher = SqsFetcher::new(Arc::new(source), &identity.queue_name);

            MackerelPlugin::new(SqsPlugin::new(fetcher), args.tempfile())
                .output_values(&mut stdout)
                .await?;
        }
    }
    stdout.flush()?;

    Ok(())
}
