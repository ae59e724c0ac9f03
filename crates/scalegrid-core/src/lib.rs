//! scalegrid-core — trigger plumbing shared by ScaleGrid scalers.
//!
//! A trigger arrives as two untyped string mappings: the trigger metadata
//! (query definition, connection parameters, tuning knobs) and the
//! authentication parameters (secret material). Scalers turn these into a
//! typed configuration through [`MetadataReader`], which performs one
//! bounded conversion per lookup and reports the first failure as a
//! [`MetadataError`].
//!
//! # Flow
//!
//! ```text
//! ScalerConfig { trigger_metadata, auth_params, scaler_index }
//!   │
//!   ├── MetadataReader::new(&trigger_metadata)  → required / optional / parsed
//!   ├── MetadataReader::new(&auth_params)       → secrets
//!   │
//!   ▼
//! scaler-specific config  ──►  MetricSpec (name + target for the autoscaler)
//! ```

pub mod config;
pub mod error;
pub mod metric;
pub mod reader;

pub use config::ScalerConfig;
pub use error::{MetadataError, MetadataResult};
pub use metric::{MetricSpec, metric_name_with_index, normalize_metric_name};
pub use reader::MetadataReader;
