//! Snark work pool — best-price proof retention and random work dispatch.
//!
//! Owns three structures that every mutating operation keeps mutually
//! consistent:
//!
//! - `proofs`: work id → cheapest priced proof seen so far,
//! - `solved`: randomized set of work ids carrying a proof,
//! - `unsolved`: randomized set of work ids still needing a proof.
//!
//! `solved` and `unsolved` are always disjoint, and a work id has a `proofs`
//! entry exactly when it is in `solved`. A work id absent from all three is
//! simply unknown to the pool.
//!
//! The pool has no internal locking: mutators take `&mut self`, so exclusive
//! access is a compile-time fact. Callers that share a pool across threads
//! wrap it in a `Mutex`; each operation runs to completion, so no partial
//! update is ever observable.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::priced_proof::PricedProof;
use crate::random_set::RandomSet;

/// A pool matching work items to their cheapest known proofs.
///
/// Generic over the work identifier `W`, the opaque proof `P`, and the fee
/// `F`. Fees only need a total order; proofs are never inspected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnarkPool<W, P, F>
where
    W: Clone + Eq + Hash,
{
    proofs: HashMap<W, PricedProof<P, F>>,
    solved: RandomSet<W>,
    unsolved: RandomSet<W>,
}

impl<W, P, F> SnarkPool<W, P, F>
where
    W: Clone + Eq + Hash + fmt::Debug,
    F: Ord,
{
    /// Create a pool with all three structures empty.
    pub fn new() -> Self {
        Self {
            proofs: HashMap::new(),
            solved: RandomSet::new(),
            unsolved: RandomSet::new(),
        }
    }

    /// Submit a proof for a work item at an asking fee.
    ///
    /// The cheapest submission wins; on a fee tie the incumbent is kept, so
    /// identical-fee resubmissions cause no replacement churn. On return the
    /// work id is in `solved` and out of `unsolved`, whatever the fee
    /// comparison decided.
    pub fn add_snark(&mut self, work: W, proof: P, fee: F) {
        let keep_incumbent = self
            .proofs
            .get(&work)
            .map(|existing| existing.fee() <= &fee)
            .unwrap_or(false);

        if keep_incumbent {
            tracing::trace!(?work, "proof not cheaper than incumbent, kept existing");
        } else if self
            .proofs
            .insert(work.clone(), PricedProof::new(proof, fee))
            .is_some()
        {
            tracing::debug!(?work, "replaced proof with cheaper submission");
        } else {
            tracing::debug!(?work, "recorded first proof");
        }

        self.unsolved.remove(&work);
        self.solved.insert(work);
    }

    /// Register a work item as needing a proof.
    ///
    /// If the item already carries a proof, that entry is dropped and the
    /// item moves back to `unsolved` — re-registration means the caller
    /// wants fresh competition, and keeping the sets disjoint is worth more
    /// than keeping a proof nobody asked for.
    pub fn add_unsolved_work(&mut self, work: W) {
        if self.proofs.remove(&work).is_some() {
            tracing::debug!(?work, "re-registered solved work, dropped its proof");
        }
        self.solved.remove(&work);
        self.unsolved.insert(work);
    }

    /// The canonical (cheapest-so-far) proof for a work item, if any.
    pub fn request_proof(&self, work: &W) -> Option<&PricedProof<P, F>> {
        self.proofs.get(work)
    }

    /// Dispatch a work item to a prover.
    ///
    /// Unsolved work is drained first so fresh demand gets attempted before
    /// re-soliciting competing proofs; only when no unsolved work exists does
    /// the pool re-open an already-solved item. Returns `None` immediately
    /// when the pool is empty — no blocking, no retry.
    pub fn request_work(&mut self) -> Option<W> {
        if let Some(work) = self.unsolved.pick_random().cloned() {
            self.unsolved.remove(&work);
            tracing::debug!(?work, "dispatched unsolved work");
            return Some(work);
        }
        self.reopen_solved_work()
    }

    /// Fallback branch of the dispatch policy: pick a solved item at random
    /// and fully forget it, discarding its proof so competition re-opens.
    ///
    /// Single decision point on purpose — the discard-on-redispatch policy
    /// is known to be crude under contention (a worse proof may end up
    /// replacing the discarded one) and is expected to be swapped out.
    fn reopen_solved_work(&mut self) -> Option<W> {
        let work = self.solved.pick_random().cloned()?;
        self.solved.remove(&work);
        self.proofs.remove(&work);
        tracing::debug!(?work, "re-dispatched solved work, discarded its proof");
        Some(work)
    }

    /// Retire a work item whose proof has been consumed (e.g. included in a
    /// block). Unconditional and idempotent; unknown work is a no-op.
    pub fn remove_solved_work(&mut self, work: &W) {
        self.solved.remove(work);
        self.proofs.remove(work);
    }

    /// Number of work items awaiting a first proof.
    pub fn unsolved_work_count(&self) -> usize {
        self.unsolved.len()
    }

    /// Number of work items carrying a proof.
    pub fn solved_work_count(&self) -> usize {
        self.solved.len()
    }

    /// Snapshot of solved work ids. Order is not meaningful.
    pub fn solved_work(&self) -> Vec<W> {
        self.solved.to_vec()
    }

    /// Snapshot of unsolved work ids. Order is not meaningful.
    pub fn unsolved_work(&self) -> Vec<W> {
        self.unsolved.to_vec()
    }

    /// Whether the pool knows no work at all.
    pub fn is_empty(&self) -> bool {
        self.solved.is_empty() && self.unsolved.is_empty()
    }
}

impl<W, P, F> Default for SnarkPool<W, P, F>
where
    W: Clone + Eq + Hash + fmt::Debug,
    F: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
