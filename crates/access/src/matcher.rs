//! Request matcher capability.

/// Tests whether a request descriptor satisfies a pattern.
///
/// The request type is chosen by the consuming runtime; this crate never
/// inspects it. Implementations must be thread-safe because the built
/// artifacts are read concurrently by evaluator threads.
pub trait Matcher<R>: Send + Sync {
    /// Return `true` if the request satisfies this matcher's pattern.
    fn matches(&self, request: &R) -> bool;
}

/// Any thread-safe predicate closure is a matcher.
impl<R, F> Matcher<R> for F
where
    F: Fn(&R) -> bool + Send + Sync,
{
    fn matches(&self, request: &R) -> bool {
        self(request)
    }
}
