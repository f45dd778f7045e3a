use thiserror::Error;

/// Errors surfaced by the search engines and the adapters feeding them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The goal predicate was never satisfied before the finite state space
    /// was exhausted. Signals a configuration error (disconnected goal, bad
    /// map), not a transient condition.
    #[error("no reachable state satisfies the goal")]
    Unreachable,

    /// An adapter was handed data it cannot build a valid state space from.
    /// Engines themselves trust their adapters and never raise this.
    #[error("invalid state space: {0}")]
    InvalidState(String),
}
