// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Values from the previous run, kept in a temp file between invocations.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PluginError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Unix seconds of the run that produced `values`
    #[serde(rename = "_lastTime")]
    pub last_time: i64,
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

impl SavedState {
    /// Non-finite values are dropped since JSON cannot carry them.
    pub fn new(last_time: i64, values: &HashMap<String, f64>) -> Self {
        let values = values
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        Self { last_time, values }
    }
}

/// Load the previous state. A missing file is not an error.
pub fn load(path: &Path) -> Result<Option<SavedState>> {
    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no state file at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(PluginError::StateRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let state = serde_json::from_slice(&contents).map_err(|source| PluginError::StateParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(state))
}

pub fn save(path: &Path, state: &SavedState) -> Result<()> {
    let write_err = |source| PluginError::StateWrite {
        path: path.to_path_buf(),
        source,
    };

    let contents = serde_json::to_vec(state).map_err(|e| write_err(std::io::Error::other(e)))?;
    std::fs::write(path, contents).map_err(write_err)
}
