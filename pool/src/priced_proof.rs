//! Priced proof value type.

use serde::{Deserialize, Serialize};

/// An immutable pair of a proof and the fee its producer demands.
///
/// Deliberately does not implement any ordering: fee comparison is a pool
/// policy decision and happens only inside [`crate::SnarkPool`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedProof<P, F> {
    proof: P,
    fee: F,
}

impl<P, F> PricedProof<P, F> {
    pub fn new(proof: P, fee: F) -> Self {
        Self { proof, fee }
    }

    pub fn proof(&self) -> &P {
        &self.proof
    }

    pub fn fee(&self) -> &F {
        &self.fee
    }

    pub fn into_parts(self) -> (P, F) {
        (self.proof, self.fee)
    }
}
