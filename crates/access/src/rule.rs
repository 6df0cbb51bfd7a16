//! Access rules pairing a matcher with its required attributes.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::{Error, Matcher, Result};

/// An immutable pairing of a request matcher with the permission attributes
/// a request must satisfy once that matcher fires.
///
/// The matcher is shared, never exclusively owned: the same matcher instance
/// may back several rules and every table projected from them. Attributes are
/// an opaque set owned by the rule; duplicates collapse and order is
/// irrelevant.
pub struct Rule<R, A> {
    matcher: Arc<dyn Matcher<R>>,
    attributes: HashSet<A>,
}

impl<R, A> Rule<R, A>
where
    A: Clone + Eq + Hash,
{
    /// Create a rule, rejecting an empty attribute set up front so a
    /// registry never holds a rule that cannot gate anything.
    pub fn new(matcher: Arc<dyn Matcher<R>>, attributes: HashSet<A>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(Error::InvalidRule("attribute set is empty".into()));
        }
        Ok(Self {
            matcher,
            attributes,
        })
    }

    /// The matcher handle this rule fires on.
    pub fn matcher(&self) -> &Arc<dyn Matcher<R>> {
        &self.matcher
    }

    /// The attributes required when this rule fires.
    pub fn attributes(&self) -> &HashSet<A> {
        &self.attributes
    }
}

impl<R, A: Clone> Clone for Rule<R, A> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            attributes: self.attributes.clone(),
        }
    }
}

impl<R, A: fmt::Debug> fmt::Debug for Rule<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("matcher", &"<dyn Matcher>")
            .field("attributes", &self.attributes)
            .finish()
    }
}
