//! Fundamental types for the Quarry proof market.
//!
//! This crate defines the concrete value types exchanged between the work
//! pool and its collaborators: work identifiers, proof fees, and opaque
//! proof blobs. The pool itself is generic over these capabilities; the
//! types here are the protocol's canonical instantiations.

pub mod fee;
pub mod hash;
pub mod proof;

pub use fee::Fee;
pub use hash::WorkHash;
pub use proof::Proof;
