// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use log::{debug, warn};

use crate::error::{PluginError, Result};
use crate::graph::{DefinitionsPayload, GraphDefinition, MetricDef};
use crate::state::{self, SavedState};

/// First line of the meta-mode output.
pub const DEFINITIONS_HEADER: &str = "# mackerel-agent-plugin";

/// Diffs against a state older than this are discarded.
const MAX_DIFF_INTERVAL_SECS: i64 = 600;

/// Metric name to the value fetched in this run.
pub type MetricValues = HashMap<String, f64>;

/// A metric source driven by the mackerel-agent plugin protocol.
#[async_trait]
pub trait Plugin: Send + Sync {
    async fn fetch_metrics(&self) -> Result<MetricValues>;

    fn graph_definition(&self) -> &GraphDefinition;
}

/// Print the meta-mode payload: the header line then the graphs as one line of JSON.
pub fn write_definitions<W: Write>(out: &mut W, graphs: &GraphDefinition) -> Result<()> {
    let json = serde_json::to_string(&DefinitionsPayload { graphs })
        .map_err(PluginError::Definitions)?;
    writeln!(out, "{DEFINITIONS_HEADER}")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Runs a [`Plugin`] and formats its output.
pub struct MackerelPlugin<P> {
    plugin: P,
    tempfile: PathBuf,
}

impl<P: Plugin> MackerelPlugin<P> {
    pub fn new(plugin: P, tempfile: impl Into<PathBuf>) -> Self {
        Self {
            plugin,
            tempfile: tempfile.into(),
        }
    }

    pub fn output_definitions<W: Write>(&self, out: &mut W) -> Result<()> {
        write_definitions(out, self.plugin.graph_definition())
    }

    pub async fn output_values<W: Write>(&self, out: &mut W) -> Result<()> {
        let now = unix_now();
        let values = self.plugin.fetch_metrics().await?;

        let last = match state::load(&self.tempfile) {
            Ok(last) => last,
            Err(e) => {
                warn!("ignoring previous values: {e}");
                None
            }
        };

        for (graph_name, graph) in self.plugin.graph_definition() {
            for metric in &graph.metrics {
                let Some(&raw) = values.get(&metric.name) else {
                    continue;
                };
                let value = match output_value(metric, raw, now, last.as_ref()) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("{e}");
                        continue;
                    }
                };
                let key = format!("{graph_name}.{}", metric.name);
                if !value.is_finite() {
                    warn!("invalid value: key = {key}, value = {value}");
                    continue;
                }
                writeln!(out, "{key}\t{value:.6}\t{now}")?;
            }
        }

        if let Err(e) = state::save(&self.tempfile, &SavedState::new(now, &values)) {
            warn!("could not save values for the next run: {e}");
        }
        Ok(())
    }
}

/// Apply the diff and scale settings of `metric` to a freshly fetched value.
fn output_value(metric: &MetricDef, raw: f64, now: i64, last: Option<&SavedState>) -> Result<f64> {
    let mut value = raw;
    if metric.diff {
        let diff_err = |reason| PluginError::Diff {
            metric: metric.name.clone(),
            reason,
        };
        let last = last.ok_or_else(|| diff_err("no previous value"))?;
        let previous = last
            .values
            .get(&metric.name)
            .copied()
            .ok_or_else(|| diff_err("no previous value"))?;
        let elapsed = now
            .checked_sub(last.last_time)
            .ok_or_else(|| diff_err("previous run time is out of range"))?;
        value = per_minute_diff(raw, previous, elapsed).map_err(diff_err)?;
    }
    if metric.scale != 0.0 {
        value *= metric.scale;
    }
    Ok(value)
}

/// Rate of change per minute between two samples `elapsed` seconds apart.
pub fn per_minute_diff(current: f64, previous: f64, elapsed: i64) -> std::result::Result<f64, &'static str> {
    if elapsed <= 0 {
        return Err("no time elapsed since the previous value");
    }
    if elapsed > MAX_DIFF_INTERVAL_SECS {
        return Err("previous value is too old");
    }
    if current < previous {
        return Err("counter seems to be reset");
    }
    debug!("diff over {elapsed}s: {previous} -> {current}");
    Ok((current - previous) * 60.0 / elapsed as f64)
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
