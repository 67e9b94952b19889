// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    InstanceRegion, ResourceIdentity, env_region, resolve_credentials, resolve_queue_name,
    resolve_region,
};
use crate::errors::Result;

pub const DEFAULT_TEMPFILE: &str = "/tmp/mackerel-plugin-sqs";

#[derive(Parser, Debug, Default)]
#[command(name = "mackerel-plugin-aws-sqs")]
#[command(about = "Reports CloudWatch statistics of an SQS queue to mackerel-agent", long_about = None)]
#[command(version)]
pub struct Args {
    /// AWS Region (defaults to AWS_REGION, then the EC2 instance region)
    #[arg(long)]
    pub region: Option<String>,

    /// AWS Access Key ID
    #[arg(long = "access-key-id")]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long = "secret-access-key")]
    pub secret_access_key: Option<String>,

    /// Name of the queue to report on
    #[arg(long)]
    pub queuename: Option<String>,

    /// Temp file name
    #[arg(long)]
    pub tempfile: Option<String>,
}

impl Args {
    /// `--tempfile ""` counts as unset.
    pub fn tempfile(&self) -> PathBuf {
        let path = self
            .tempfile
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_TEMPFILE);
        PathBuf::from(path)
    }

    /// Resolve the identity, checking the cheap local settings before any
    /// instance metadata lookup.
    pub async fn resolve_identity(&self, instance: &dyn InstanceRegion) -> Result<ResourceIdentity> {
        let queue_name = resolve_queue_name(self.queuename.as_deref())?;
        let credentials =
            resolve_credentials(self.access_key_id.as_deref(), self.secret_access_key.as_deref())?;
        let region = resolve_region(self.region.as_deref(), env_region(), instance).await?;

        Ok(ResourceIdentity {
            region,
            credentials,
            queue_name,
        })
    }
}
