//! Error types for panel orchestration.
//!
//! The panel's failure policy is deliberately narrow: stray UI events in
//! the middle of a transition are expected and no-op silently, and missing
//! device capabilities are a normal branch. What remains is the
//! configuration gap — a route key with no catalog entry — which callers
//! surface to diagnostics and then omit, never crash on.

use thiserror::Error;

use crate::source::SourceKey;

/// Gaps between the configured catalog and what an operation asked for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry matches the requested route key.
    #[error("no source catalog entry for key {key}")]
    UnknownSourceKey {
        /// The key that missed.
        key: SourceKey,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_names_the_key() {
        let err = CatalogError::UnknownSourceKey { key: SourceKey::new("ghost") };
        assert_eq!(err.to_string(), "no source catalog entry for key ghost");
    }
}
