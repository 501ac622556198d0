use tracing::debug;

use super::{accepts_immediately, ensure_disjoint, splice_initial};
use crate::{math::OrderedSet, prelude::*};

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Computes an automaton accepting the concatenation of the language of `self` with the language of
    /// `other`, i.e. all words `uv` such that `u` is accepted by `self` and `v` is accepted by `other`. The
    /// states of both automata have to be disjoint.
    ///
    /// Every transition leaving an initial state of `other` is copied onto each final state of `self`. The
    /// initial states are those of `self` and the final states are those of `other`, together with the final
    /// states of `self` if `other` has an initial state that is final.
    pub fn concatenation(&self, other: &Self) -> Result<Self, AutomatonError> {
        ensure_disjoint(self, other, "concatenation")?;

        let mut transitions: OrderedSet<Transition<Q, S>> = self
            .transitions()
            .iter()
            .chain(other.transitions())
            .cloned()
            .collect();
        for q in self.final_states() {
            transitions.extend(splice_initial(other, q));
        }

        let mut final_states = other.final_states().clone();
        if accepts_immediately(other) {
            final_states.extend(self.final_states().iter().cloned());
        }

        debug!(
            "concatenation spliced the initial transitions of the right operand onto {} final states",
            self.final_states().len()
        );

        Automaton::new(
            self.alphabet().union(other.alphabet()).cloned(),
            self.states().union(other.states()).cloned(),
            self.initial().iter().cloned(),
            transitions,
            final_states,
        )
    }
}
