//! scalegrid-cassandra — Cassandra count-query trigger for ScaleGrid.
//!
//! Turns a trigger definition (string metadata plus auth parameters) into a
//! validated [`CassandraMetadata`]. The scaler execution loop uses it to open
//! a driver session, run the count query, and compare the result against
//! `target_query_value`.
//!
//! # Validation order
//!
//! ```text
//! query → targetQueryValue → metricName → username → clusterIPAddress
//!       → consistency (One) → protoVersion (4) → password (auth only)
//!       → keyspace ("") → activationTargetQueryValue (0)
//! ```
//!
//! The first failing step is reported; nothing after it is evaluated.

pub mod consistency;
pub mod metadata;
pub mod triggers;

pub use consistency::{Consistency, UnknownConsistency};
pub use metadata::{CassandraMetadata, parse_cassandra_metadata};
pub use triggers::CassandraTriggers;
