// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Resolution of the queue identity from flags, environment and instance metadata.

use std::env;

use async_trait::async_trait;
use aws_config::imds::region::ImdsRegionProvider;
use log::debug;

use crate::errors::{Error, Result};

/// Checked in order when `--region` is not given.
pub const REGION_ENV_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Static {
        access_key_id: String,
        secret_access_key: String,
    },
    /// Environment, shared profile, then instance role
    DefaultChain,
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            CredentialSource::DefaultChain => f.write_str("DefaultChain"),
        }
    }
}

/// Which queue to report on and how to reach it. Fixed for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    pub region: String,
    pub credentials: CredentialSource,
    pub queue_name: String,
}

/// Region of the EC2 instance the plugin runs on.
#[async_trait]
pub trait InstanceRegion: Send + Sync {
    async fn instance_region(&self) -> Option<String>;
}

/// Reads the region from the EC2 instance metadata service.
#[derive(Debug, Default)]
pub struct ImdsRegion;

#[async_trait]
impl InstanceRegion for ImdsRegion {
    async fn instance_region(&self) -> Option<String> {
        ImdsRegionProvider::builder()
            .build()
            .region()
            .await
            .map(|region| region.to_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First non-empty region from the environment.
pub fn env_region() -> Option<String> {
    REGION_ENV_VARS
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
}

/// Region from the flag, then `env_region`, then instance metadata.
pub async fn resolve_region(
    flag: Option<&str>,
    env_region: Option<String>,
    instance: &dyn InstanceRegion,
) -> Result<String> {
    if let Some(region) = non_empty(flag) {
        return Ok(region.to_string());
    }
    if let Some(region) = non_empty(env_region.as_deref()) {
        debug!("using region {region} from the environment");
        return Ok(region.to_string());
    }
    match instance.instance_region().await {
        Some(region) if !region.is_empty() => {
            debug!("using region {region} from instance metadata");
            Ok(region)
        }
        _ => Err(Error::Connection(
            "could not determine AWS region; pass --region or set AWS_REGION".to_string(),
        )),
    }
}

/// Explicit keys must come as a pair; otherwise the default chain is used.
pub fn resolve_credentials(
    access_key_id: Option<&str>,
    secret_access_key: Option<&str>,
) -> Result<CredentialSource> {
    match (non_empty(access_key_id), non_empty(secret_access_key)) {
        (Some(id), Some(secret)) => Ok(CredentialSource::Static {
            access_key_id: id.to_string(),
            secret_access_key: secret.to_string(),
        }),
        (None, None) => Ok(CredentialSource::DefaultChain),
        _ => Err(Error::Config(
            "--access-key-id and --secret-access-key must be given together".to_string(),
        )),
    }
}

pub fn resolve_queue_name(flag: Option<&str>) -> Result<String> {
    non_empty(flag)
        .map(str::to_string)
        .ok_or_else(|| Error::Config("--queuename is required".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FixedRegion(Option<&'static str>);

    #[async_trait]
    impl InstanceRegion for FixedRegion {
        async fn instance_region(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[tokio::test]
    async fn test_flag_wins() {
        let region = resolve_region(
            Some("eu-west-1"),
            Some("us-east-1".to_string()),
            &FixedRegion(Some("ap-northeast-1")),
        )
        .await
        .unwrap();
        assert_eq!(region, "eu-west-1");
    }

    #[tokio::test]
    async fn test_env_before_instance() {
        let region = resolve_region(
            None,
            Some("us-east-1".to_string()),
            &FixedRegion(Some("ap-northeast-1")),
        )
        .await
        .unwrap();
        assert_eq!(region, "us-east-1");
    }

    #[tokio::test]
    async fn test_instance_fallback() {
        let region = resolve_region(Some(""), None, &FixedRegion(Some("ap-northeast-1")))
            .await
            .unwrap();
        assert_eq!(region, "ap-northeast-1");
    }

    #[tokio::test]
    async fn test_no_region_anywhere() {
        let err = resolve_region(None, Some("  ".to_string()), &FixedRegion(None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[test]
    fn test_env_region_order() {
        temp_env::with_vars(
            [
                ("AWS_REGION", Some("us-west-2")),
                ("AWS_DEFAULT_REGION", Some("us-east-1")),
            ],
            || assert_eq!(env_region().as_deref(), Some("us-west-2")),
        );
        temp_env::with_vars(
            [("AWS_REGION", None), ("AWS_DEFAULT_REGION", Some("us-east-1"))],
            || assert_eq!(env_region().as_deref(), Some("us-east-1")),
        );
        temp_env::with_vars(
            [("AWS_REGION", Some("")), ("AWS_DEFAULT_REGION", None)],
            || assert_eq!(env_region(), None),
        );
    }

    #[test]
    fn test_static_credentials() {
        let creds = resolve_credentials(Some("AKIA123"), Some("secret")).unwrap();
        assert_eq!(
            creds,
            CredentialSource::Static {
                access_key_id: "AKIA123".to_string(),
                secret_access_key: "secret".to_string(),
            }
        );
        assert!(!format!("{creds:?}").contains("\"secret\""));
    }

    #[test]
    fn test_default_chain_credentials() {
        assert_eq!(
            resolve_credentials(None, Some("")).unwrap(),
            CredentialSource::DefaultChain
        );
    }

    #[test]
    fn test_half_credentials_rejected() {
        let err = resolve_credentials(Some("AKIA123"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_queue_name_required() {
        assert_eq!(resolve_queue_name(Some("jobs")).unwrap(), "jobs");
        assert!(matches!(resolve_queue_name(None), Err(Error::Config(_))));
        assert!(matches!(resolve_queue_name(Some(" ")), Err(Error::Config(_))));
    }
}
