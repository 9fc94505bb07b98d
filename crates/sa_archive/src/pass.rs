//! The state machine of a single document pass.
//!
//! ```text
//! Idle ─> Parsing ─> Constructing ─> Resolving ─> Done
//!           └─> Failed
//! Idle ─> Writing ─> Done
//!           └─> Failed
//! ```
//!
//! Only fatal errors lead to `Failed`; object-scoped problems are collected
//! as diagnostics while the pass continues to `Done`.

use core::fmt;

// -----------------------------------------------------------------------------
// PassState

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PassState {
    #[default]
    Idle,
    /// Building the tree from the input bytes.
    Parsing,
    /// Instantiating objects and indexing their IDs.
    Constructing,
    /// Resolving references.
    Resolving,
    Writing,
    Done,
    Failed,
}

impl PassState {
    /// Whether `self -> next` is a legal transition.
    pub const fn can_advance(self, next: PassState) -> bool {
        use PassState::*;
        matches!(
            (self, next),
            (Idle, Parsing)
                | (Parsing, Constructing)
                | (Parsing, Failed)
                | (Constructing, Resolving)
                | (Resolving, Done)
                | (Idle, Writing)
                | (Writing, Done)
                | (Writing, Failed)
        )
    }

    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(self, PassState::Done | PassState::Failed)
    }
}

impl fmt::Display for PassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Pass

/// Tracks the [`PassState`] of one document, logging each transition.
#[derive(Debug, Default)]
pub struct Pass {
    state: PassState,
}

impl Pass {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: PassState::Idle,
        }
    }

    #[inline]
    pub const fn state(&self) -> PassState {
        self.state
    }

    /// Move to `next`.
    ///
    /// # Panics
    ///
    /// In debug builds, if the transition is not legal.
    pub fn advance(&mut self, next: PassState) {
        debug_assert!(
            self.state.can_advance(next),
            "illegal document pass transition {} -> {}",
            self.state,
            next,
        );
        log::debug!("document pass: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Move to [`PassState::Failed`].
    #[inline]
    pub fn fail(&mut self) {
        self.advance(PassState::Failed);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Pass, PassState};

    #[test]
    fn read_and_write_paths() {
        let mut pass = Pass::new();
        pass.advance(PassState::Parsing);
        pass.advance(PassState::Constructing);
        pass.advance(PassState::Resolving);
        pass.advance(PassState::Done);
        assert!(pass.state().is_finished());

        let mut pass = Pass::new();
        pass.advance(PassState::Writing);
        pass.fail();
        assert_eq!(pass.state(), PassState::Failed);
    }

    #[test]
    fn illegal_transitions() {
        assert!(!PassState::Idle.can_advance(PassState::Done));
        assert!(!PassState::Constructing.can_advance(PassState::Failed));
        assert!(!PassState::Done.can_advance(PassState::Parsing));
        assert!(PassState::Parsing.can_advance(PassState::Failed));
    }
}
