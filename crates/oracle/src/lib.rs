//! Steps oracle.
//!
//! Fetches a health record from the feed, reads its `steps` field and
//! encodes the value as a 32-byte big-endian unsigned integer, the word an
//! on-chain consumer reads as `uint256`.
//!
//! The pipeline is split at two seams:
//! 1. [`HealthSource`] fetches the JSON document (HTTP in production,
//!    a fixed document in tests)
//! 2. [`extract_steps`] validates the field and [`encode_uint256`] packs it
//!
//! Every failure (transport, status, JSON, missing or malformed field)
//! surfaces as an [`OracleError`]; nothing is ever encoded from a default.

pub mod config;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod source;

pub use config::OracleConfig;
pub use encoding::{Uint256, encode_uint256};
pub use error::{OracleError, Result};
pub use extract::{STEPS_FIELD, extract_steps};
pub use pipeline::StepsOracle;
pub use source::{HealthSource, HttpHealthSource, StaticHealthSource};
