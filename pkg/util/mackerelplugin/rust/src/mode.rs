// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::env;

/// Set by mackerel-agent when it wants graph definitions instead of values.
pub const META_ENV_VAR: &str = "MACKEREL_AGENT_PLUGIN_META";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Definitions,
    Values,
}

impl OutputMode {
    /// Any non-empty value of `MACKEREL_AGENT_PLUGIN_META` selects meta mode.
    pub fn from_env() -> Self {
        match env::var_os(META_ENV_VAR) {
            Some(v) if !v.is_empty() => OutputMode::Definitions,
            _ => OutputMode::Values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_values() {
        temp_env::with_var_unset(META_ENV_VAR, || {
            assert_eq!(OutputMode::from_env(), OutputMode::Values);
        });
    }

    #[test]
    fn test_empty_is_values() {
        temp_env::with_var(META_ENV_VAR, Some(""), || {
            assert_eq!(OutputMode::from_env(), OutputMode::Values);
        });
    }

    #[test]
    fn test_any_value_is_definitions() {
        for value in ["1", "true", "0"] {
            temp_env::with_var(META_ENV_VAR, Some(value), || {
                assert_eq!(OutputMode::from_env(), OutputMode::Definitions);
            });
        }
    }
}
