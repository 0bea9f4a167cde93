//! Timing run measurements, emitted as a JSON summary.

use serde::Serialize;

/// One timed serialize/deserialize pass.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub strategy: &'static str,
    pub books: usize,
    pub payload_bytes: usize,
    pub serialize_micros: u128,
    pub deserialize_micros: u128,
    /// Round-trip verified: the restored dataset equals the source dataset.
    pub verified: bool,
}

/// All runs of one harness invocation.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub runs: Vec<Run>,
}
