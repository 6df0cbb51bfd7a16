//! Ordered projection of the registry consumed by the dispatch evaluator.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::{Matcher, RuleRegistry};

/// An ordered mapping from matcher to required attributes, projected 1:1
/// from a [`RuleRegistry`].
///
/// The table is a pure snapshot: building it copies every entry, so registry
/// mutation after a build is invisible to the table. Entries are kept as an
/// ordered list of pairs rather than a keyed map — two registrations with
/// structurally identical matchers stay two entries, because collapsing them
/// would silently discard an authorization rule.
pub struct PolicyTable<R, A> {
    entries: Vec<(Arc<dyn Matcher<R>>, HashSet<A>)>,
}

impl<R, A> PolicyTable<R, A>
where
    A: Clone + Eq + Hash,
{
    /// Project the registry, in order, into a table.
    ///
    /// Deterministic: building twice from an unmodified registry yields
    /// element-wise equal tables.
    pub fn build(registry: &RuleRegistry<R, A>) -> Self {
        let entries = registry
            .iter()
            .map(|rule| (Arc::clone(rule.matcher()), rule.attributes().clone()))
            .collect();
        Self { entries }
    }

    /// Iterate `(matcher, attributes)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<dyn Matcher<R>>, &HashSet<A>)> {
        self.entries.iter().map(|(m, a)| (m, a))
    }

    /// Walk the table in order and return the attributes of the first entry
    /// whose matcher accepts the request, or `None` when nothing matches.
    pub fn attributes_for(&self, request: &R) -> Option<&HashSet<A>> {
        self.entries
            .iter()
            .find(|(matcher, _)| matcher.matches(request))
            .map(|(_, attributes)| attributes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R, A: fmt::Debug> fmt::Debug for PolicyTable<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyTable")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;

    type Req = String;

    fn attrs(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn prefix_rule(prefix: &'static str, names: &[&str]) -> Rule<Req, String> {
        let matcher: Arc<dyn Matcher<Req>> = Arc::new(move |r: &Req| r.starts_with(prefix));
        Rule::new(matcher, attrs(names)).unwrap()
    }

    #[test]
    fn test_table_preserves_registry_order() {
        let mut registry = RuleRegistry::new();
        registry.append(prefix_rule("/admin", &["ROLE_ADMIN"]));
        registry.append(prefix_rule("/", &["ROLE_USER"]));
        registry.insert_at(0, prefix_rule("/health", &["ROLE_ANON"])).unwrap();

        let table = PolicyTable::build(&registry);
        let order: Vec<_> = table
            .iter()
            .map(|(_, a)| a.iter().next().unwrap().as_str())
            .collect();
        assert_eq!(order, ["ROLE_ANON", "ROLE_ADMIN", "ROLE_USER"]);
    }

    #[test]
    fn test_duplicate_matchers_are_not_merged() {
        let matcher: Arc<dyn Matcher<Req>> = Arc::new(|_: &Req| true);
        let mut registry = RuleRegistry::new();
        registry.append(Rule::new(Arc::clone(&matcher), attrs(&["first"])).unwrap());
        registry.append(Rule::new(Arc::clone(&matcher), attrs(&["second"])).unwrap());

        let table = PolicyTable::build(&registry);
        assert_eq!(table.len(), 2);

        let order: Vec<_> = table
            .iter()
            .map(|(_, a)| a.iter().next().unwrap().as_str())
            .collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_first_match_wins_for_overlapping_patterns() {
        let mut registry = RuleRegistry::new();
        registry.append(prefix_rule("/api/admin", &["ROLE_ADMIN"]));
        registry.append(prefix_rule("/api", &["ROLE_USER"]));

        let table = PolicyTable::build(&registry);
        let found = table.attributes_for(&"/api/admin/users".to_string()).unwrap();
        assert_eq!(found, &attrs(&["ROLE_ADMIN"]));

        let found = table.attributes_for(&"/api/docs".to_string()).unwrap();
        assert_eq!(found, &attrs(&["ROLE_USER"]));

        assert!(table.attributes_for(&"/login".to_string()).is_none());
    }

    #[test]
    fn test_insert_at_front_changes_the_winner() {
        let mut registry = RuleRegistry::new();
        registry.append(prefix_rule("/api", &["ROLE_USER"]));
        registry.insert_at(0, prefix_rule("/api/admin", &["ROLE_ADMIN"])).unwrap();

        let table = PolicyTable::build(&registry);
        let found = table.attributes_for(&"/api/admin/users".to_string()).unwrap();
        assert_eq!(found, &attrs(&["ROLE_ADMIN"]));
    }

    #[test]
    fn test_table_is_a_snapshot() {
        let mut registry = RuleRegistry::new();
        registry.append(prefix_rule("/api", &["ROLE_USER"]));

        let table = PolicyTable::build(&registry);
        registry.insert_at(0, prefix_rule("/api", &["ROLE_ADMIN"])).unwrap();

        assert_eq!(table.len(), 1);
        let found = table.attributes_for(&"/api/users".to_string()).unwrap();
        assert_eq!(found, &attrs(&["ROLE_USER"]));
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut registry = RuleRegistry::new();
        registry.append(prefix_rule("/a", &["A"]));
        registry.append(prefix_rule("/b", &["B", "C"]));

        let one = PolicyTable::build(&registry);
        let two = PolicyTable::build(&registry);

        assert_eq!(one.len(), two.len());
        for ((m1, a1), (m2, a2)) in one.iter().zip(two.iter()) {
            assert!(Arc::ptr_eq(m1, m2));
            assert_eq!(a1, a2);
        }
    }
}
