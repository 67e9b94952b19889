// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Plugin-side half of the mackerel-agent plugin protocol.
//!
//! In meta mode a plugin prints its graph definitions; otherwise it prints one
//! `key\tvalue\tunix_time` line per metric. Values from the previous run are
//! kept in a temp file so that counters can be reported as rates.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

mod error;
mod graph;
mod mode;
mod plugin;
pub mod state;

pub use error::{PluginError, Result};
pub use graph::{Graph, GraphDefinition, MetricDef};
pub use mode::{META_ENV_VAR, OutputMode};
pub use plugin::{
    DEFINITIONS_HEADER, MackerelPlugin, MetricValues, Plugin, per_minute_diff, write_definitions,
};
