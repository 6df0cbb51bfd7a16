//! Voter capability.

use std::collections::HashSet;
use std::sync::Arc;

use crate::Vote;

/// Casts a grant/deny/abstain verdict for a request against the attributes
/// the matched rule requires.
///
/// Concrete voters (role checks, expression evaluators, ...) live outside
/// this crate. Implementations must be thread-safe: an assembled decision
/// mechanism is consulted concurrently by evaluator threads.
pub trait Voter<R, A>: Send + Sync {
    fn vote(&self, request: &R, attributes: &HashSet<A>) -> Vote;
}

/// Any thread-safe closure over `(request, attributes)` is a voter.
impl<R, A, F> Voter<R, A> for F
where
    F: Fn(&R, &HashSet<A>) -> Vote + Send + Sync,
{
    fn vote(&self, request: &R, attributes: &HashSet<A>) -> Vote {
        self(request, attributes)
    }
}

/// Supplies the voters applicable to one policy variant.
///
/// Each variant that protects a resource family implements this to hand its
/// voter set to the assembler; the assembler never looks inside the voters.
/// Order is significant — it is the tie-break precedence within the
/// consensus strategy. An empty set is legal and produces a mechanism that
/// denies everything.
pub trait VoterSupplier<R, A> {
    fn decision_voters(&self) -> Vec<Arc<dyn Voter<R, A>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_voter() {
        let requires_admin = |_: &String, attrs: &HashSet<String>| {
            if attrs.contains("ROLE_ADMIN") {
                Vote::Deny
            } else {
                Vote::Grant
            }
        };

        let mut attrs = HashSet::new();
        attrs.insert("ROLE_ADMIN".to_string());
        assert_eq!(requires_admin.vote(&"/x".to_string(), &attrs), Vote::Deny);
        assert_eq!(
            requires_admin.vote(&"/x".to_string(), &HashSet::new()),
            Vote::Grant
        );
    }
}
