// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Mutex, Once};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use log::{LevelFilter, Log, Metadata, Record};

use crate::errors::{Error, Result};
use crate::source::{DataPoint, StatisticsQuery, StatisticsSource};

pub(crate) fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

pub(crate) fn point(secs: u64, value: f64) -> DataPoint {
    DataPoint {
        timestamp: at(secs),
        value,
    }
}

/// In-memory statistics source. Metrics without a canned response return no points.
#[derive(Default)]
pub(crate) struct StaticSource {
    responses: Mutex<HashMap<String, std::result::Result<Vec<DataPoint>, String>>>,
    queries: Mutex<Vec<StatisticsQuery>>,
}

impl StaticSource {
    pub(crate) fn respond(&self, metric: &str, points: Vec<DataPoint>) {
        self.responses
            .lock()
            .unwrap()
            .insert(metric.to_string(), Ok(points));
    }

    pub(crate) fn fail(&self, metric: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(metric.to_string(), Err(message.to_string()));
    }

    pub(crate) fn queries(&self) -> Vec<StatisticsQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatisticsSource for StaticSource {
    async fn get_statistics(&self, query: &StatisticsQuery) -> Result<Vec<DataPoint>> {
        self.queries.lock().unwrap().push(query.clone());

        match self.responses.lock().unwrap().get(&query.metric_name) {
            Some(Ok(points)) => Ok(points.clone()),
            Some(Err(message)) => Err(Error::Query {
                metric: query.metric_name.clone(),
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

static CAPTURED_LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED_LOGS
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

/// Route `log` records of this test binary into memory. Safe to call from
/// every test; the logger is installed once.
pub(crate) fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE_LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured lines mentioning `needle`. Tests share the logger, so filter on
/// something unique to the test.
pub(crate) fn logs_containing(needle: &str) -> Vec<String> {
    CAPTURED_LOGS
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}
