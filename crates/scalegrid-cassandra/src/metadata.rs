//! Cassandra trigger metadata parsing.
//!
//! [`parse_cassandra_metadata`] validates the trigger metadata and auth
//! parameters in a fixed order and stops at the first violation. The
//! password is only ever read from the auth parameters.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use scalegrid_core::{
    MetadataReader, MetadataResult, MetricSpec, ScalerConfig, metric_name_with_index,
    normalize_metric_name,
};

use crate::consistency::Consistency;

/// Every Cassandra metric name starts with this prefix.
pub const METRIC_NAME_PREFIX: &str = "cassandra-";

/// Suffix used when neither `metricName` nor `keyspace` is given.
pub const DEFAULT_METRIC_SUFFIX: &str = "cassandra";

/// Native protocol version used when `protoVersion` is absent.
pub const DEFAULT_PROTO_VERSION: u32 = 4;

/// Validated Cassandra trigger configuration.
///
/// Built only by [`parse_cassandra_metadata`]; fields are read-only.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CassandraMetadata {
    query: String,
    target_query_value: u64,
    activation_target_query_value: u64,
    username: String,
    #[serde(skip_serializing)]
    password: String,
    #[serde(rename = "clusterIPAddress")]
    cluster_ip_address: String,
    consistency: Consistency,
    proto_version: u32,
    keyspace: String,
    metric_name: String,
}

/// Parse a Cassandra trigger from its metadata and auth parameters.
pub fn parse_cassandra_metadata(
    trigger_metadata: &HashMap<String, String>,
    auth_params: &HashMap<String, String>,
) -> MetadataResult<CassandraMetadata> {
    let meta = MetadataReader::new(trigger_metadata);
    let auth = MetadataReader::new(auth_params);

    let query = meta.required("query", "query")?;
    let target_query_value = meta.required_int("targetQueryValue", "targetQueryValue")?;

    let metric_suffix = meta
        .optional("metricName")
        .or_else(|| meta.optional("keyspace"))
        .unwrap_or(DEFAULT_METRIC_SUFFIX);
    let metric_name = normalize_metric_name(&format!("{METRIC_NAME_PREFIX}{metric_suffix}"));

    let username = meta.required("username", "username")?;
    let cluster_ip_address = meta.required("clusterIPAddress", "cluster IP address")?;
    let consistency = meta.optional_enum("consistency", Consistency::One)?;
    let proto_version = meta.optional_int("protoVersion", DEFAULT_PROTO_VERSION)?;
    let password = auth.required("password", "password")?;
    let keyspace = meta.optional("keyspace").unwrap_or_default();
    let activation_target_query_value = meta.optional_int("activationTargetQueryValue", 0)?;

    Ok(CassandraMetadata {
        query: query.to_string(),
        target_query_value,
        activation_target_query_value,
        username: username.to_string(),
        password: password.to_string(),
        cluster_ip_address: cluster_ip_address.to_string(),
        consistency,
        proto_version,
        keyspace: keyspace.to_string(),
        metric_name,
    })
}

impl CassandraMetadata {
    /// Parse from a [`ScalerConfig`].
    pub fn from_scaler_config(config: &ScalerConfig) -> MetadataResult<Self> {
        parse_cassandra_metadata(&config.trigger_metadata, &config.auth_params)
    }

    /// The count query to run.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query result per replica the autoscaler aims for.
    pub fn target_query_value(&self) -> u64 {
        self.target_query_value
    }

    /// Results at or below this value leave the target inactive.
    pub fn activation_target_query_value(&self) -> u64 {
        self.activation_target_query_value
    }

    /// Login for the driver session.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password taken from the auth parameters.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The raw `clusterIPAddress` value, possibly a comma-separated list.
    pub fn cluster_ip_address(&self) -> &str {
        &self.cluster_ip_address
    }

    /// Contact points from `clusterIPAddress`.
    pub fn hosts(&self) -> Vec<&str> {
        self.cluster_ip_address
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect()
    }

    /// Consistency level for the count query.
    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    /// Native protocol version for the driver session.
    pub fn proto_version(&self) -> u32 {
        self.proto_version
    }

    /// Keyspace for the session; empty when not set.
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Metric name, always starting with `cassandra-`.
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Whether a query result should keep the target active.
    pub fn is_active(&self, query_value: u64) -> bool {
        query_value > self.activation_target_query_value
    }

    /// External metric descriptor for the trigger at `scaler_index`.
    pub fn metric_spec(&self, scaler_index: usize) -> MetricSpec {
        MetricSpec {
            metric_name: metric_name_with_index(scaler_index, &self.metric_name),
            target_average_value: self.target_query_value,
        }
    }
}

impl fmt::Debug for CassandraMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CassandraMetadata")
            .field("query", &self.query)
            .field("target_query_value", &self.target_query_value)
            .field(
                "activation_target_query_value",
                &self.activation_target_query_value,
            )
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("cluster_ip_address", &self.cluster_ip_address)
            .field("consistency", &self.consistency)
            .field("proto_version", &self.proto_version)
            .field("keyspace", &self.keyspace)
            .field("metric_name", &self.metric_name)
            .finish()
    }
}
