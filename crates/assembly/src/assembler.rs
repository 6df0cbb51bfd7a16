//! Policy assembler.

use std::fmt;
use std::hash::Hash;

use access::{PolicyTable, Rule, RuleRegistry};
use tracing::debug;
use vote::{ConsensusManager, VoterSupplier, create_default_decision_manager};

/// The two artifacts the request-evaluation runtime consumes.
///
/// Both are immutable snapshots: mutating the assembler afterwards, or
/// assembling again, never changes an `Assembly` already handed out.
pub struct Assembly<R, A> {
    /// Ordered matcher-to-attributes table, walked first-match by the
    /// dispatch evaluator.
    pub table: PolicyTable<R, A>,
    /// Consensus decision mechanism, consulted per request by the
    /// enforcement point.
    pub decisions: ConsensusManager<R, A>,
}

/// Collects the rules of one policy variant during configuration and builds
/// the evaluation artifacts from them.
///
/// Construction is a one-shot, single-threaded phase: variants append or
/// splice rules, then [`assemble`](Self::assemble) projects the registry and
/// wraps the variant's voters. The assembler itself is never consulted at
/// request time.
pub struct PolicyAssembler<R, A> {
    registry: RuleRegistry<R, A>,
}

impl<R, A> PolicyAssembler<R, A>
where
    A: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::new(),
        }
    }

    /// Register a rule after every existing rule.
    pub fn add_rule(&mut self, rule: Rule<R, A>) {
        self.registry.append(rule);
    }

    /// Register a rule at `index`, ahead of everything at and after it.
    /// Lets a later-configured variant take priority for overlapping
    /// patterns.
    pub fn insert_rule(&mut self, index: usize, rule: Rule<R, A>) -> access::Result<()> {
        self.registry.insert_at(index, rule)
    }

    /// The rules collected so far, in evaluation order.
    pub fn registry(&self) -> &RuleRegistry<R, A> {
        &self.registry
    }

    /// Build the policy table and the default decision mechanism from the
    /// collected rules and the variant's voters.
    ///
    /// Infallible: an empty registry yields an empty table, and an empty
    /// voter set yields a mechanism that denies every request.
    pub fn assemble(&self, supplier: &dyn VoterSupplier<R, A>) -> Assembly<R, A> {
        let table = PolicyTable::build(&self.registry);
        let voters = supplier.decision_voters();
        debug!(
            rules = self.registry.len(),
            voters = voters.len(),
            "assembling policy artifacts"
        );

        Assembly {
            table,
            decisions: create_default_decision_manager(voters),
        }
    }
}

impl<R, A> Default for PolicyAssembler<R, A>
where
    A: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, A: fmt::Debug + Clone + Eq + Hash> fmt::Debug for PolicyAssembler<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyAssembler")
            .field("rules", &self.registry.len())
            .finish()
    }
}
