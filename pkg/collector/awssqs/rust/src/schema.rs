// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::sync::LazyLock;

use mackerel_plugin::{Graph, GraphDefinition, MetricDef};

static GRAPHS: LazyLock<GraphDefinition> = LazyLock::new(|| {
    let metrics = |names: &[&str]| -> Vec<MetricDef> {
        names.iter().map(|n| MetricDef::new(n, n)).collect()
    };

    GraphDefinition::from([
        (
            "sqs.Messages".to_string(),
            Graph::new(
                "SQS NumberOfMessagesSent",
                "integer",
                metrics(&[
                    "NumberOfMessagesSent",
                    "NumberOfMessagesReceived",
                    "NumberOfEmptyReceives",
                    "NumberOfMessagesDeleted",
                ]),
            ),
        ),
        (
            "sqs.MessageSize".to_string(),
            Graph::new("SQS Message Size", "bytes", metrics(&["SentMessageSize"])),
        ),
        (
            "sqs.Queue".to_string(),
            Graph::new(
                "SQS Queue Status",
                "integer",
                metrics(&[
                    "ApproximateNumberOfMessagesDelayed",
                    "ApproximateNumberOfMessagesVisible",
                    "ApproximateNumberOfMessagesNotVisible",
                ]),
            ),
        ),
    ])
});

/// Graphs advertised to mackerel-agent. Built once, never mutated.
pub fn graph_definition() -> &'static GraphDefinition {
    &GRAPHS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SQS_METRICS;
    use std::collections::BTreeSet;

    #[test]
    fn test_graph_layout() {
        let graphs = graph_definition();
        let names: Vec<&str> = graphs.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["sqs.MessageSize", "sqs.Messages", "sqs.Queue"]);

        let size = &graphs["sqs.MessageSize"];
        assert_eq!(size.label, "SQS Message Size");
        assert_eq!(size.unit, "bytes");

        let queue = &graphs["sqs.Queue"];
        assert_eq!(queue.unit, "integer");
        assert_eq!(queue.metrics.len(), 3);
        assert_eq!(queue.metrics[0].name, "ApproximateNumberOfMessagesDelayed");
    }

    #[test]
    fn test_labels_match_names() {
        for graph in graph_definition().values() {
            for metric in &graph.metrics {
                assert_eq!(metric.label, metric.name);
                assert!(!metric.diff);
                assert!(!metric.stacked);
            }
        }
    }

    #[test]
    fn test_schema_matches_fetched_metrics() {
        let in_schema: BTreeSet<&str> = graph_definition()
            .values()
            .flat_map(|g| g.metrics.iter().map(|m| m.name.as_str()))
            .collect();
        let fetched: BTreeSet<&str> = SQS_METRICS.into_iter().collect();
        assert_eq!(in_schema, fetched);
    }

    #[test]
    fn test_lookup_is_stable() {
        assert_eq!(graph_definition(), graph_definition());
        assert!(std::ptr::eq(graph_definition(), graph_definition()));
    }
}
