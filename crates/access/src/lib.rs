//! Ordered access-rule storage and the policy table projected from it.
//!
//! This crate is the structural half of the authorization assembler: it
//! stores request-matching rules in evaluation order and projects them into
//! the ordered table an external dispatch evaluator walks at request time.
//!
//! # Core Concepts
//!
//! ## Matcher
//!
//! A [`Matcher`] tests whether a request descriptor satisfies a pattern. The
//! request type and the matching logic both live outside this crate; any
//! thread-safe `Fn(&R) -> bool` closure qualifies.
//!
//! ## Rule
//!
//! A [`Rule`] pairs a shared matcher handle with the set of permission
//! attributes a matching request must satisfy. Rules are immutable once
//! constructed.
//!
//! ## RuleRegistry
//!
//! The [`RuleRegistry`] holds rules in evaluation order. Position is
//! priority: the first matching rule wins. [`RuleRegistry::insert_at`] lets a
//! later-configured rule splice in front of earlier ones, which changes the
//! winner for overlapping patterns.
//!
//! ## PolicyTable
//!
//! [`PolicyTable::build`] projects the registry into an ordered list of
//! `(matcher, attributes)` pairs. Duplicate matchers are never merged, and
//! the table is a pure snapshot with no aliasing back to the registry.
//!
//! # Example
//!
//! ```
//! use access::{Matcher, PolicyTable, Rule, RuleRegistry};
//! use std::collections::HashSet;
//! use std::sync::Arc;
//!
//! let admin: Arc<dyn Matcher<String>> = Arc::new(|path: &String| path.starts_with("/admin"));
//! let mut attributes = HashSet::new();
//! attributes.insert("ROLE_ADMIN");
//!
//! let mut registry = RuleRegistry::new();
//! registry.append(Rule::new(admin, attributes)?);
//!
//! let table = PolicyTable::build(&registry);
//! assert!(table.attributes_for(&"/admin/users".to_string()).is_some());
//! # Ok::<(), access::Error>(())
//! ```

mod error;
mod matcher;
mod registry;
mod rule;
mod table;

pub use error::{Error, Result};
pub use matcher::Matcher;
pub use registry::RuleRegistry;
pub use rule::Rule;
pub use table::PolicyTable;
