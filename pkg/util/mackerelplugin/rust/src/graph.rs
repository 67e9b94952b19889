// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Graph definitions advertised to mackerel-agent in meta mode.

use std::collections::BTreeMap;

use serde::Serialize;

/// One metric line inside a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDef {
    pub name: String,
    pub label: String,
    /// Report the per-minute rate against the previous run instead of the raw value
    pub diff: bool,
    pub stacked: bool,
    /// Multiplier applied before output; 0 means unscaled
    pub scale: f64,
}

impl MetricDef {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            diff: false,
            stacked: false,
            scale: 0.0,
        }
    }

    pub fn diff(mut self) -> Self {
        self.diff = true;
        self
    }

    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub label: String,
    pub unit: String,
    pub metrics: Vec<MetricDef>,
}

impl Graph {
    pub fn new(label: &str, unit: &str, metrics: Vec<MetricDef>) -> Self {
        Self {
            label: label.to_string(),
            unit: unit.to_string(),
            metrics,
        }
    }
}

/// Graph name to graph. Ordered so that output is stable across runs.
pub type GraphDefinition = BTreeMap<String, Graph>;

/// Wire shape of the meta-mode payload.
#[derive(Serialize)]
pub(crate) struct DefinitionsPayload<'a> {
    pub graphs: &'a GraphDefinition,
}
