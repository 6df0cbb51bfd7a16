//! Voter aggregation — consensus-based access decisions.
//!
//! This crate is the decision half of the authorization assembler. Policy
//! variants supply an ordered set of [`Voter`]s through the [`VoterSupplier`]
//! capability; [`create_default_decision_manager`] wraps that set in a
//! [`ConsensusManager`] that tallies grants against denies per request.
//!
//! The assembler never looks inside a voter. Role checks, expression
//! evaluators, and every other concrete strategy live with the policy
//! variant that supplies them.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use std::sync::Arc;
//! use vote::{create_default_decision_manager, Decision, Vote, Voter};
//!
//! let always_grant: Arc<dyn Voter<String, String>> =
//!     Arc::new(|_: &String, _: &HashSet<String>| Vote::Grant);
//!
//! let manager = create_default_decision_manager(vec![always_grant]);
//! let decision = manager.decide(&"/api".to_string(), &HashSet::new());
//! assert_eq!(decision, Decision::Grant);
//! ```

mod consensus;
mod vote;
mod voter;

pub use consensus::{ConsensusManager, create_default_decision_manager};
pub use vote::{Decision, Vote};
pub use voter::{Voter, VoterSupplier};
