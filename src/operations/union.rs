use tracing::debug;

use super::{accepts_immediately, ensure_disjoint, fresh_state, splice_initial};
use crate::{math::OrderedSet, prelude::*};

impl<Q: FreshState, S: Symbol> Automaton<Q, S> {
    /// Computes an automaton accepting the union of the languages of `self` and `other`. The states of both
    /// automata have to be disjoint, otherwise [`AutomatonError::NotDisjoint`] is returned and the caller should
    /// rename the states (for example using [`Automaton::map_states`]).
    ///
    /// A fresh state becomes the only initial state. It receives a copy of every transition that leaves an
    /// initial state of either operand, and it is final if one of the operands has an initial state that is
    /// final (so that the empty word remains accepted).
    pub fn union(&self, other: &Self) -> Result<Self, AutomatonError> {
        ensure_disjoint(self, other, "union")?;
        let start = fresh_state([self, other])?;

        let mut transitions: OrderedSet<Transition<Q, S>> = self
            .transitions()
            .iter()
            .chain(other.transitions())
            .cloned()
            .collect();
        transitions.extend(splice_initial(self, &start));
        transitions.extend(splice_initial(other, &start));

        let mut final_states: OrderedSet<Q> =
            self.final_states().union(other.final_states()).cloned().collect();
        if accepts_immediately(self) || accepts_immediately(other) {
            final_states.insert(start.clone());
        }

        let mut states: OrderedSet<Q> = self.states().union(other.states()).cloned().collect();
        states.insert(start.clone());

        debug!(
            "union of automata with {} and {} states uses fresh initial state {}",
            self.size(),
            other.size(),
            start.show()
        );

        Automaton::new(
            self.alphabet().union(other.alphabet()).cloned(),
            states,
            [start],
            transitions,
            final_states,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{automaton::fixtures::transitions, prelude::*};

    /// Accepts precisely the word `a`.
    fn single_a() -> Automaton {
        Automaton::from_table([0], [1], transitions(&[(0, 'a', 1)], &[])).unwrap()
    }

    /// Accepts `b+`, with states 10 and 11.
    fn b_plus() -> Automaton {
        Automaton::from_table([10], [11], transitions(&[(10, 'b', 11), (11, 'b', 11)], &[]))
            .unwrap()
    }

    #[test_log::test]
    fn union_of_disjoint_languages() {
        let union = single_a().union(&b_plus()).unwrap();

        assert_eq!(union.initial().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(union.is_deterministic());
        assert!(union.accepts("a".chars()));
        assert!(union.accepts("b".chars()));
        assert!(union.accepts("bbb".chars()));
        assert!(!union.accepts([]));
        assert!(!union.accepts("ab".chars()));
        assert!(!union.accepts("aa".chars()));
    }

    #[test]
    fn union_keeps_the_empty_word() {
        let a_star: Automaton =
            Automaton::from_table([0], [0], transitions(&[(0, 'a', 0)], &[])).unwrap();
        let union = a_star.union(&b_plus()).unwrap();

        assert!(union.is_final(&1));
        assert!(union.accepts([]));
        assert!(union.accepts("aaa".chars()));
        assert!(union.accepts("bb".chars()));
        assert!(!union.accepts("ab".chars()));
    }

    #[test]
    fn union_copies_epsilon_transitions_of_initial_states() {
        let delayed: Automaton =
            Automaton::from_table([0], [2], transitions(&[(1, 'a', 2)], &[(0, 1)])).unwrap();
        let union = delayed.union(&b_plus()).unwrap();

        assert!(union.successors(&3, &Label::Epsilon).any(|q| *q == 1));
        assert!(union.accepts("a".chars()));
        assert!(union.accepts("b".chars()));
        assert!(!union.accepts([]));
    }

    #[test]
    fn union_requires_disjoint_states() {
        let result = single_a().union(&single_a());
        assert!(matches!(
            result,
            Err(AutomatonError::NotDisjoint {
                operation: "union",
                ..
            })
        ));
    }

    #[test]
    fn union_with_string_states() {
        let left = single_a().map_states(|q| format!("l{q}")).unwrap();
        let right = b_plus().map_states(|q| format!("r{q}")).unwrap();
        let union = left.union(&right).unwrap();
        assert_eq!(union.initial().iter().next().map(String::as_str), Some("a"));
        assert!(union.accepts("a".chars()));
        assert!(union.accepts("bb".chars()));
    }
}
