use tracing::debug;

use super::{fresh_state, splice_initial};
use crate::{math::OrderedSet, prelude::*};

impl<Q: FreshState, S: Symbol> Automaton<Q, S> {
    /// Computes an automaton for the Kleene star of the language of `self`, that is all concatenations of
    /// zero or more words accepted by `self`.
    ///
    /// A fresh state becomes the only initial state and is final, so the empty word is accepted. It receives a
    /// copy of every transition leaving an initial state of `self`. The same transitions are also copied onto
    /// every final state, which allows starting over after a word of `self` has been read completely.
    pub fn kleene_star(&self) -> Result<Self, AutomatonError> {
        let start = fresh_state([self])?;

        let mut transitions = self.transitions().clone();
        transitions.extend(splice_initial(self, &start));
        for q in self.final_states() {
            transitions.extend(splice_initial(self, q));
        }

        let mut states = self.states().clone();
        states.insert(start.clone());
        let mut final_states: OrderedSet<Q> = self.final_states().clone();
        final_states.insert(start.clone());

        debug!("kleene star uses fresh initial state {}", start.show());

        Automaton::new(
            self.alphabet().iter().cloned(),
            states,
            [start],
            transitions,
            final_states,
        )
    }
}
