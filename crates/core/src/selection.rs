//! Toggle state for list items that can be opened and closed.
//!
//! The state is either a single optional active id or a set of active ids.
//! [`toggle`] is the only transition; nothing resets the state except toggling
//! an id off again.

use std::hash::Hash;

use indexmap::IndexSet;

/// How many entries may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Zero or one entry open.
    #[default]
    Single,
    /// Any subset of entries open.
    Multi,
}

impl SelectionMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

/// Which ids are currently active.
///
/// Equality on the multi variant is set equality; the incidental insertion
/// order of [`IndexSet`] does not participate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState<K: Hash + Eq> {
    Single { active: Option<K> },
    Multi { active: IndexSet<K> },
}

impl<K: Hash + Eq> SelectionState<K> {
    /// Empty single-selection state.
    #[must_use]
    pub fn single() -> Self {
        Self::Single { active: None }
    }

    /// Empty multi-selection state.
    #[must_use]
    pub fn multi() -> Self {
        Self::Multi {
            active: IndexSet::new(),
        }
    }

    /// Empty state for the requested mode.
    #[must_use]
    pub fn for_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::single(),
            SelectionMode::Multi => Self::multi(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single { .. } => SelectionMode::Single,
            Self::Multi { .. } => SelectionMode::Multi,
        }
    }

    /// Flip membership of `id`, returning the next state.
    #[must_use]
    pub fn toggled(mut self, id: K) -> Self {
        self.toggle(id);
        self
    }

    /// Flip membership of `id` in place.
    pub fn toggle(&mut self, id: K) {
        match self {
            Self::Single { active } => {
                if active.as_ref() == Some(&id) {
                    *active = None;
                } else {
                    *active = Some(id);
                }
            }
            Self::Multi { active } => {
                // `shift_remove` keeps the remaining members in insertion order.
                if !active.shift_remove(&id) {
                    active.insert(id);
                }
            }
        }
    }

    /// Whether the content for `id` should be shown.
    #[must_use]
    pub fn is_open(&self, id: &K) -> bool {
        match self {
            Self::Single { active } => active.as_ref() == Some(id),
            Self::Multi { active } => active.contains(id),
        }
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        match self {
            Self::Single { active } => usize::from(active.is_some()),
            Self::Multi { active } => active.len(),
        }
    }
}

/// Pure form of [`SelectionState::toggle`].
#[must_use]
pub fn toggle<K: Hash + Eq>(state: SelectionState<K>, id: K) -> SelectionState<K> {
    state.toggled(id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_mode_replaces_and_clears() {
        let state = SelectionState::single();
        let state = toggle(state, "a");
        assert!(state.is_open(&"a"));
        let state = toggle(state, "b");
        assert!(!state.is_open(&"a"));
        assert!(state.is_open(&"b"));
        let state = toggle(state, "b");
        assert_eq!(state, SelectionState::Single { active: None });
    }

    #[test]
    fn multi_mode_toggle_sequence_leaves_symmetric_difference() {
        let state = SelectionState::multi();
        let state = toggle(toggle(toggle(state, "a"), "b"), "a");
        let expected: IndexSet<&str> = ["b"].into_iter().collect();
        assert_eq!(state, SelectionState::Multi { active: expected });
    }

    #[test]
    fn multi_mode_equality_ignores_order() {
        let left = SelectionState::multi().toggled(1).toggled(2);
        let right = SelectionState::multi().toggled(2).toggled(1);
        assert_eq!(left, right);
    }

    proptest! {
        #[test]
        fn single_mode_never_has_more_than_one_active(ids in prop::collection::vec(0u8..8, 0..64)) {
            let mut state = SelectionState::single();
            for id in ids {
                state.toggle(id);
                prop_assert!(state.active_count() <= 1);
            }
        }

        #[test]
        fn multi_toggling_twice_restores_state(
            prefix in prop::collection::vec(0u8..8, 0..32),
            id in 0u8..8,
        ) {
            let mut state = SelectionState::multi();
            for prior in prefix {
                state.toggle(prior);
            }
            let before = state.clone();
            let after = state.toggled(id).toggled(id);
            prop_assert_eq!(before, after);
        }

        // In single mode another id would be displaced by the first toggle, so
        // the round trip only holds when nothing else is open.
        #[test]
        fn single_toggling_twice_restores_state(id in 0u8..8, open in any::<bool>()) {
            let state = if open {
                SelectionState::single().toggled(id)
            } else {
                SelectionState::single()
            };
            let before = state.clone();
            let after = state.toggled(id).toggled(id);
            prop_assert_eq!(before, after);
        }

        #[test]
        fn multi_membership_follows_toggle_parity(ids in prop::collection::vec(0u8..8, 0..64)) {
            let mut counts: HashMap<u8, usize> = HashMap::new();
            let mut state = SelectionState::multi();
            for id in &ids {
                *counts.entry(*id).or_default() += 1;
                state.toggle(*id);
            }
            for id in 0u8..8 {
                let odd = counts.get(&id).copied().unwrap_or(0) % 2 == 1;
                prop_assert_eq!(state.is_open(&id), odd);
            }
        }
    }
}
