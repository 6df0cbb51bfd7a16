//! Ordered, index-addressable rule storage.

use std::fmt;
use std::hash::Hash;

use crate::{Error, Result, Rule};

/// An ordered sequence of rules whose position is their evaluation priority:
/// when the external runtime walks the projected table, the first matching
/// rule wins.
///
/// The registry is append/insert-only. Rules registered later can still take
/// priority over earlier ones via [`insert_at`](Self::insert_at), which
/// splices a rule in front of everything at and after the given index.
/// Structurally identical matchers are never merged; each registration is a
/// distinct entry evaluated in order.
pub struct RuleRegistry<R, A> {
    rules: Vec<Rule<R, A>>,
}

impl<R, A> RuleRegistry<R, A>
where
    A: Clone + Eq + Hash,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule at the end, after every existing rule.
    pub fn append(&mut self, rule: Rule<R, A>) {
        self.rules.push(rule);
    }

    /// Insert a rule at `index`, shifting the rules at `[index, len)` right
    /// by one. `insert_at(len, rule)` is equivalent to [`append`](Self::append).
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index > len`.
    pub fn insert_at(&mut self, index: usize, rule: Rule<R, A>) -> Result<()> {
        if index > self.rules.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.insert(index, rule);
        Ok(())
    }

    /// The current ordered rules as an independent copy. Matcher handles are
    /// shared; attribute sets are deep-copied, so later registry mutation
    /// never shows through a snapshot.
    pub fn snapshot(&self) -> Vec<Rule<R, A>> {
        self.rules.clone()
    }

    /// Iterate the rules in evaluation order without copying.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<R, A>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R, A> Default for RuleRegistry<R, A>
where
    A: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, A: fmt::Debug> fmt::Debug for RuleRegistry<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules)
            .finish()
    }
}
