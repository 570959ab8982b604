//! Batch request dispatcher
//!
//! A batch request carries a list of independent sub-requests. Each one is
//! turned into a synthetic [`RouteRequest`](crate::core::router::RouteRequest),
//! dispatched through the same router that serves external traffic, and its
//! response is normalized into an entry of the ordered `responses` array.
//!
//! - `parser`: batch body → [`BatchSpec`]
//! - `builder`: [`SubRequestSpec`] → synthetic request
//! - `normalizer`: handler response → [`SubResponseValue`]
//! - `aggregator`: ordered values → outbound payload
//! - `executor`: the end-to-end operation, sequential or bounded-concurrent
//!
//! The operation is all-or-nothing: the first failing sub-request fails the
//! whole batch and no partial result is produced.

mod aggregator;
mod builder;
mod executor;
mod normalizer;
mod parser;
mod types;


pub use aggregator::aggregate;
pub use builder::build;
pub use executor::BatchExecutor;
pub use normalizer::normalize;
pub use parser::{parse, parse_bytes, parse_method};
pub use types::{
    BatchParseError, BatchResult, BatchSpec, SubRequestSpec, SubResponseValue, SyntheticRequest,
};
