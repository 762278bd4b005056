//! Node-local snark work pool.
//!
//! Mediates the proof-generation market: untrusted remote provers pull
//! unsolved work, compute proofs off-pool, and submit them back with an
//! asking fee. The pool keeps, per work item, only the cheapest proof seen
//! so far; consumers pull the canonical proof for a work item and retire it
//! once the proof lands in a block.
//!
//! The pool is polymorphic over the work identifier, proof, and fee types —
//! transport, proof verification, and pricing strategy all live with the
//! callers.

pub mod error;
pub mod pool;
pub mod priced_proof;
pub mod random_set;

pub use error::PoolError;
pub use pool::SnarkPool;
pub use priced_proof::PricedProof;
pub use random_set::RandomSet;
