use crate::{math::OrderedSet, prelude::*};

/// Helper struct for the construction of automata. It collects transitions, initial and final states and
/// (optionally) additional symbols and states, and infers the remaining components when [`Self::build`]
/// is called.
///
/// # Example
///
/// We want to create an automaton with three states 0, 1 and 2 over the alphabet `['a', 'b']`, which
/// accepts all words that end with `ab`. State 0 is initial, state 2 is final and we add the transitions
/// - from state 0 to state 0 on symbols 'a' and 'b',
/// - from state 0 to state 1 on symbol 'a',
/// - from state 1 to state 2 on symbol 'b'.
/// ```
/// use regular_automata::prelude::*;
///
/// let aut: Automaton = Automaton::builder()
///     .with_transitions([(0, 'a', 0), (0, 'b', 0), (0, 'a', 1), (1, 'b', 2)])
///     .with_initial([0])
///     .with_final([2])
///     .build()
///     .unwrap();
/// assert!(aut.accepts("bab".chars()));
/// assert!(!aut.accepts("ba".chars()));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder<Q = u32, S = char> {
    symbols: OrderedSet<Label<S>>,
    states: OrderedSet<Q>,
    transitions: Vec<Transition<Q, S>>,
    initial: OrderedSet<Q>,
    final_states: OrderedSet<Q>,
}

impl<Q, S> Default for AutomatonBuilder<Q, S> {
    fn default() -> Self {
        Self {
            symbols: OrderedSet::new(),
            states: OrderedSet::new(),
            transitions: vec![],
            initial: OrderedSet::new(),
            final_states: OrderedSet::new(),
        }
    }
}

impl<Q: State, S: Symbol> AutomatonBuilder<Q, S> {
    /// By default, the only alphabet symbols in the automaton that is built are the ones that
    /// appear on at least one transition. This method can be used to force additional symbols
    /// to appear.
    pub fn with_alphabet_symbols<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols.into_iter().map(Label::Symbol));
        self
    }

    /// Adds states which do not necessarily occur on any transition.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Adds transitions that are labeled with proper symbols.
    pub fn with_transitions<I: IntoIterator<Item = (Q, S, Q)>>(mut self, transitions: I) -> Self {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(start, symbol, end)| Transition::new(start, symbol, end)),
        );
        self
    }

    /// Adds ε-transitions, given as pairs of start and end state.
    pub fn with_epsilon_transitions<I: IntoIterator<Item = (Q, Q)>>(mut self, transitions: I) -> Self {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(start, end)| Transition::epsilon(start, end)),
        );
        self
    }

    /// Marks the given states as initial.
    pub fn with_initial<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.initial.extend(states);
        self
    }

    /// Marks the given states as final.
    pub fn with_final<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.final_states.extend(states);
        self
    }

    /// Builds the automaton. Its states are all states that were added explicitly, occur on a transition
    /// or were marked as initial or final. Its alphabet consists of all labels occurring on a transition,
    /// which includes ε if there is an ε-transition, together with the explicitly added symbols. Fails if
    /// no initial state was given.
    pub fn build(self) -> Result<Automaton<Q, S>, AutomatonError> {
        let mut alphabet = self.symbols;
        alphabet.extend(self.transitions.iter().map(|t| t.label.clone()));

        let mut states = self.states;
        states.extend(
            self.transitions
                .iter()
                .flat_map(|t| [t.start.clone(), t.end.clone()]),
        );
        states.extend(self.initial.iter().cloned());
        states.extend(self.final_states.iter().cloned());

        Automaton::new(
            alphabet,
            states,
            self.initial,
            self.transitions,
            self.final_states,
        )
    }
}
