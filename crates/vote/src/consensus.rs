//! Consensus-based decision mechanism.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::{Decision, Vote, Voter};

/// An immutable decision mechanism that polls an ordered voter list and
/// aggregates by consensus.
///
/// Tallying rules, applied per request:
/// - grants > denies — grant
/// - denies > grants — deny
/// - nonzero tie — governed by [`allow_if_equal`](Self::allow_if_equal),
///   default deny
/// - every voter abstains (or there are no voters) — governed by
///   [`allow_if_all_abstain`](Self::allow_if_all_abstain), default deny
///
/// Both defaults fail closed. The mechanism holds no per-request state and
/// is safe to consult from any number of threads.
pub struct ConsensusManager<R, A> {
    voters: Vec<Arc<dyn Voter<R, A>>>,
    allow_if_equal: bool,
    allow_if_all_abstain: bool,
}

impl<R, A> ConsensusManager<R, A> {
    /// Wrap the given voters with fail-closed defaults.
    pub fn new(voters: Vec<Arc<dyn Voter<R, A>>>) -> Self {
        Self {
            voters,
            allow_if_equal: false,
            allow_if_all_abstain: false,
        }
    }

    /// Grant when grants and denies tie at a nonzero count.
    pub fn allow_if_equal(mut self, allow: bool) -> Self {
        self.allow_if_equal = allow;
        self
    }

    /// Grant when every voter abstains.
    pub fn allow_if_all_abstain(mut self, allow: bool) -> Self {
        self.allow_if_all_abstain = allow;
        self
    }

    /// Poll every voter and aggregate their verdicts into one decision.
    pub fn decide(&self, request: &R, attributes: &HashSet<A>) -> Decision {
        let mut grants = 0usize;
        let mut denies = 0usize;

        for voter in &self.voters {
            match voter.vote(request, attributes) {
                Vote::Grant => grants += 1,
                Vote::Deny => denies += 1,
                Vote::Abstain => {}
            }
        }

        if grants > denies {
            Decision::Grant
        } else if denies > grants {
            Decision::Deny
        } else if grants > 0 {
            // Nonzero tie
            if self.allow_if_equal {
                Decision::Grant
            } else {
                Decision::Deny
            }
        } else if self.allow_if_all_abstain {
            Decision::Grant
        } else {
            Decision::Deny
        }
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }
}

impl<R, A> fmt::Debug for ConsensusManager<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsensusManager")
            .field("voters", &self.voters.len())
            .field("allow_if_equal", &self.allow_if_equal)
            .field("allow_if_all_abstain", &self.allow_if_all_abstain)
            .finish()
    }
}

/// Assemble the default decision mechanism for a voter set: consensus
/// aggregation with deny-if-equal and deny-if-all-abstain.
///
/// Never fails, including on an empty voter list — that mechanism simply
/// denies every request.
pub fn create_default_decision_manager<R, A>(
    voters: Vec<Arc<dyn Voter<R, A>>>,
) -> ConsensusManager<R, A> {
    ConsensusManager::new(voters)
}
