//! Assembles access rules and voters into evaluation artifacts.
//!
//! A policy variant — one per protected-resource family — configures a
//! [`PolicyAssembler`] with ordered rules, implements
//! [`vote::VoterSupplier`] to hand over its voters, and calls
//! [`PolicyAssembler::assemble`] once at build time. The resulting
//! [`Assembly`] carries the two artifacts the request-evaluation runtime
//! consumes: an ordered [`access::PolicyTable`] for first-match dispatch and
//! a [`vote::ConsensusManager`] for per-request decisions.
//!
//! # Example
//!
//! ```
//! use assembly::PolicyAssembler;
//! use access::{Matcher, Rule};
//! use vote::{Decision, Vote, Voter, VoterSupplier};
//! use std::collections::HashSet;
//! use std::sync::Arc;
//!
//! struct AdminVariant;
//!
//! impl VoterSupplier<String, String> for AdminVariant {
//!     fn decision_voters(&self) -> Vec<Arc<dyn Voter<String, String>>> {
//!         vec![Arc::new(|_: &String, _: &HashSet<String>| Vote::Grant)]
//!     }
//! }
//!
//! let matcher: Arc<dyn Matcher<String>> = Arc::new(|p: &String| p.starts_with("/admin"));
//! let mut attributes = HashSet::new();
//! attributes.insert("ROLE_ADMIN".to_string());
//!
//! let mut assembler = PolicyAssembler::new();
//! assembler.add_rule(Rule::new(matcher, attributes)?);
//!
//! let assembly = assembler.assemble(&AdminVariant);
//! let required = assembly.table.attributes_for(&"/admin/users".to_string()).unwrap();
//! assert_eq!(
//!     assembly.decisions.decide(&"/admin/users".to_string(), required),
//!     Decision::Grant
//! );
//! # Ok::<(), access::Error>(())
//! ```

mod assembler;

pub use assembler::{Assembly, PolicyAssembler};
