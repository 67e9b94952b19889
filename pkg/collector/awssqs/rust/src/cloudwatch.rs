// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::SystemTime;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Datapoint, Dimension, Statistic as CwStatistic};
use log::{debug, info, warn};

use crate::config::{CredentialSource, ResourceIdentity};
use crate::errors::{Error, Result};
use crate::metrics::Statistic;
use crate::source::{DataPoint, StatisticsQuery, StatisticsSource};

const PROVIDER_NAME: &str = "mackerel-plugin-aws-sqs";

/// [`StatisticsSource`] backed by CloudWatch `GetMetricStatistics`.
pub struct CloudWatchSource {
    client: Client,
}

impl CloudWatchSource {
    /// Build the client and resolve credentials up front so that an auth
    /// problem fails the run before any metric is queried.
    pub async fn connect(identity: &ResourceIdentity) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(identity.region.clone()));

        if let CredentialSource::Static {
            access_key_id,
            secret_access_key,
        } = &identity.credentials
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id.clone(),
                secret_access_key.clone(),
                None,
                None,
                PROVIDER_NAME,
            ));
        }

        let sdk_config = loader.load().await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| Error::Connection("no AWS credentials provider available".to_string()))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::Connection(DisplayErrorContext(e).to_string()))?;

        info!("connected to CloudWatch in {}", identity.region);
        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }
}

#[async_trait]
impl StatisticsSource for CloudWatchSource {
    async fn get_statistics(&self, query: &StatisticsQuery) -> Result<Vec<DataPoint>> {
        debug!(
            "GetMetricStatistics {} {}={} ({})",
            query.metric_name, query.dimension_name, query.dimension_value, query.statistic
        );

        let output = self
            .client
            .get_metric_statistics()
            .namespace(query.namespace)
            .metric_name(&query.metric_name)
            .dimensions(
                Dimension::builder()
                    .name(query.dimension_name)
                    .value(&query.dimension_value)
                    .build(),
            )
            .start_time(DateTime::from(query.start_time))
            .end_time(DateTime::from(query.end_time))
            .period(i32::try_from(query.period.as_secs()).unwrap_or(i32::MAX))
            .statistics(cw_statistic(query.statistic))
            .send()
            .await
            .map_err(|e| Error::Query {
                metric: query.metric_name.clone(),
                message: DisplayErrorContext(e).to_string(),
            })?;

        Ok(output
            .datapoints()
            .iter()
            .filter_map(|dp| data_point(dp, query.statistic))
            .collect())
    }
}

fn cw_statistic(statistic: Statistic) -> CwStatistic {
    match statistic {
        Statistic::Sum => CwStatistic::Sum,
        Statistic::Average => CwStatistic::Average,
    }
}

/// Reduce an API data point to the requested statistic. Points missing the
/// timestamp or the statistic are dropped.
fn data_point(dp: &Datapoint, statistic: Statistic) -> Option<DataPoint> {
    let value = match statistic {
        Statistic::Sum => dp.sum(),
        Statistic::Average => dp.average(),
    }?;
    let timestamp = match dp.timestamp().map(|ts| SystemTime::try_from(*ts)) {
        Some(Ok(timestamp)) => timestamp,
        Some(Err(e)) => {
            warn!("dropping data point with unusable timestamp: {e}");
            return None;
        }
        None => return None,
    };
    Some(DataPoint { timestamp, value })
}
