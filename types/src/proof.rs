//! Opaque proof blob.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A serialized cryptographic proof, opaque to the pool.
///
/// Verification happens outside the pool, before any fee-based decision is
/// trusted; here a proof is just bytes with a stable encoding.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof(Vec<u8>);

impl Proof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{:02x}", b)).collect();
        write!(f, "Proof({} bytes, {}..)", self.0.len(), prefix)
    }
}
