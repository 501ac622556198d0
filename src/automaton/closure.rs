use std::collections::VecDeque;

use tracing::trace;

use crate::{math::OrderedSet, prelude::*};

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Computes the ε-closure of the given seed states, which is the set of all states that can be reached
    /// from a seed by following zero or more ε-transitions. In particular, the seeds themselves are always
    /// part of the closure and an empty seed yields an empty closure.
    ///
    /// # Example
    /// ```
    /// use regular_automata::prelude::*;
    ///
    /// let aut: Automaton = Automaton::from_table(
    ///     [0],
    ///     [2],
    ///     [Transition::epsilon(0, 1), Transition::epsilon(1, 2), Transition::new(2, 'a', 3)],
    /// )
    /// .unwrap();
    /// assert_eq!(aut.epsilon_closure([0]), math::OrderedSet::from([0, 1, 2]));
    /// assert_eq!(aut.epsilon_closure([3]), math::OrderedSet::from([3]));
    /// ```
    pub fn epsilon_closure<I: IntoIterator<Item = Q>>(&self, seed: I) -> OrderedSet<Q> {
        let mut closure = OrderedSet::new();
        let mut queue: VecDeque<Q> = seed.into_iter().collect();

        while let Some(state) = queue.pop_front() {
            if closure.contains(&state) {
                continue;
            }
            for successor in self.successors(&state, &Label::Epsilon) {
                if !closure.contains(successor) {
                    queue.push_back(successor.clone());
                }
            }
            closure.insert(state);
        }

        trace!("ε-closure contains {} states", closure.len());
        closure
    }

    /// Computes the set of states that can be reached from `states` by reading `symbol`, where ε-transitions
    /// may be taken after the symbol has been read. For `states` being ε-closed this is one step in the
    /// simulation of the automaton on a word.
    pub fn step(&self, states: &OrderedSet<Q>, symbol: &S) -> OrderedSet<Q> {
        let label = Label::Symbol(symbol.clone());
        self.epsilon_closure(
            states
                .iter()
                .flat_map(|q| self.successors(q, &label))
                .cloned(),
        )
    }
}
