use std::fmt::Display;

use tracing::trace;

use crate::{
    math::{Bijection, OrderedMap, OrderedSet},
    prelude::*,
};

mod builder;
pub use builder::AutomatonBuilder;

mod closure;

mod table;

/// A transition is a triple consisting of the state it starts in, its label and the state it leads to.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Transition<Q, S> {
    /// The state in which the transition originates.
    pub start: Q,
    /// The label, which may be ε.
    pub label: Label<S>,
    /// The state that is reached.
    pub end: Q,
}

impl<Q, S> Transition<Q, S> {
    /// Creates a new transition from `start` to `end` on `label`.
    pub fn new<L: Into<Label<S>>>(start: Q, label: L, end: Q) -> Self {
        Self {
            start,
            label: label.into(),
            end,
        }
    }

    /// Creates a new ε-transition from `start` to `end`.
    pub fn epsilon(start: Q, end: Q) -> Self {
        Self {
            start,
            label: Label::Epsilon,
            end,
        }
    }
}

impl<Q, S> From<(Q, Label<S>, Q)> for Transition<Q, S> {
    fn from((start, label, end): (Q, Label<S>, Q)) -> Self {
        Self { start, label, end }
    }
}

impl<Q: Show, S: Show> Show for Transition<Q, S> {
    fn show(&self) -> String {
        format!(
            "<{}, {}, {}>",
            self.start.show(),
            self.label.show(),
            self.end.show()
        )
    }
}

/// The successor function of an automaton, mapping a state and a label to the set of states that can be reached.
pub(crate) type Delta<Q, S> = OrderedMap<Q, OrderedMap<Label<S>, OrderedSet<Q>>>;

/// A (possibly non-deterministic) finite automaton with ε-transitions. It consists of
/// - an alphabet, which may or may not contain ε,
/// - a set of states,
/// - a non-empty set of initial states,
/// - a set of [`Transition`]s, and
/// - a set of final states. This set may be empty, in which case the automaton accepts no word at all.
///
/// Upon construction, the automaton is validated and the transitions are indexed by their origin and label,
/// which makes non-determinism representable as a single `(state, label)` pair mapping to more than one
/// successor. Whether the automaton is deterministic is computed once and cached, see
/// [`Automaton::is_deterministic`]. Automata are never modified, all operations produce new automata.
///
/// # Example
/// ```
/// use regular_automata::prelude::*;
///
/// let aut: Automaton = Automaton::from_table(
///     [0],
///     [1],
///     [Transition::new(0, 'a', 1), Transition::new(1, 'b', 0)],
/// )
/// .unwrap();
/// assert!(aut.is_deterministic());
/// assert!(aut.accepts("aba".chars()));
/// assert!(!aut.accepts("ab".chars()));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Automaton<Q = u32, S = char> {
    alphabet: OrderedSet<Label<S>>,
    states: OrderedSet<Q>,
    initial: OrderedSet<Q>,
    transitions: OrderedSet<Transition<Q, S>>,
    final_states: OrderedSet<Q>,
    delta: Delta<Q, S>,
    deterministic: bool,
}

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Builds a new automaton from its constituent parts and validates it. The construction fails if
    /// - an initial or final state is not contained in `states`,
    /// - there is no initial state,
    /// - a transition starts or ends in a state that is not contained in `states`, or
    /// - a transition is labeled with a symbol that does not belong to `alphabet`. Note that ε is always
    ///   permitted as a label, even if it is not part of the alphabet.
    pub fn new<A, L, X, I, T, F>(
        alphabet: A,
        states: X,
        initial: I,
        transitions: T,
        final_states: F,
    ) -> Result<Self, AutomatonError>
    where
        A: IntoIterator<Item = L>,
        L: Into<Label<S>>,
        X: IntoIterator<Item = Q>,
        I: IntoIterator<Item = Q>,
        T: IntoIterator<Item = Transition<Q, S>>,
        F: IntoIterator<Item = Q>,
    {
        let alphabet: OrderedSet<Label<S>> = alphabet.into_iter().map(Into::into).collect();
        let states: OrderedSet<Q> = states.into_iter().collect();
        let initial: OrderedSet<Q> = initial.into_iter().collect();
        let final_states: OrderedSet<Q> = final_states.into_iter().collect();
        let transitions: OrderedSet<Transition<Q, S>> = transitions.into_iter().collect();

        if let Some(q) = initial.iter().find(|q| !states.contains(q)) {
            return Err(AutomatonError::InitialNotInStates(q.show()));
        }
        if let Some(q) = final_states.iter().find(|q| !states.contains(q)) {
            return Err(AutomatonError::FinalNotInStates(q.show()));
        }
        if initial.is_empty() {
            return Err(AutomatonError::EmptyInitial);
        }

        for transition in &transitions {
            for q in [&transition.start, &transition.end] {
                if !states.contains(q) {
                    return Err(AutomatonError::UnknownTransitionState {
                        transition: transition.show(),
                        state: q.show(),
                    });
                }
            }
            if !transition.label.is_epsilon() && !alphabet.contains(&transition.label) {
                return Err(AutomatonError::UnknownLabel {
                    transition: transition.show(),
                    label: transition.label.show(),
                });
            }
        }

        Ok(Self::from_validated_parts(
            alphabet,
            states,
            initial,
            transitions,
            final_states,
        ))
    }

    /// Builds an automaton from a set of initial states, a set of final states and a set of transitions. The
    /// alphabet consists of all labels that occur on some transition and the states are precisely the states
    /// which are the start or end of some transition. Initial and final states therefore have to occur on at
    /// least one transition, otherwise the construction fails.
    pub fn from_table<I, F, T>(
        initial: I,
        final_states: F,
        transitions: T,
    ) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = Q>,
        F: IntoIterator<Item = Q>,
        T: IntoIterator<Item = Transition<Q, S>>,
    {
        let transitions: OrderedSet<Transition<Q, S>> = transitions.into_iter().collect();
        let alphabet: OrderedSet<Label<S>> =
            transitions.iter().map(|t| t.label.clone()).collect();
        let states: OrderedSet<Q> = transitions
            .iter()
            .flat_map(|t| [t.start.clone(), t.end.clone()])
            .collect();
        Self::new(alphabet, states, initial, transitions, final_states)
    }

    /// Returns a builder, which is the most convenient way of constructing an automaton by hand.
    pub fn builder() -> AutomatonBuilder<Q, S> {
        AutomatonBuilder::default()
    }

    /// Assembles an automaton from parts that are already known to be valid. This indexes the transitions
    /// and computes whether the automaton is deterministic.
    pub(crate) fn from_validated_parts(
        alphabet: OrderedSet<Label<S>>,
        states: OrderedSet<Q>,
        initial: OrderedSet<Q>,
        transitions: OrderedSet<Transition<Q, S>>,
        final_states: OrderedSet<Q>,
    ) -> Self {
        let mut delta: Delta<Q, S> = OrderedMap::new();
        let mut deterministic = initial.len() == 1;

        for transition in &transitions {
            if transition.label.is_epsilon() {
                deterministic = false;
            }
            let successors = delta
                .entry(transition.start.clone())
                .or_default()
                .entry(transition.label.clone())
                .or_default();
            successors.insert(transition.end.clone());
            if successors.len() > 1 {
                deterministic = false;
            }
        }

        trace!(
            "built automaton with {} states and {} transitions, deterministic: {}",
            states.len(),
            transitions.len(),
            deterministic
        );

        Self {
            alphabet,
            states,
            initial,
            transitions,
            final_states,
            delta,
            deterministic,
        }
    }

    /// Returns the alphabet, which may contain ε.
    pub fn alphabet(&self) -> &OrderedSet<Label<S>> {
        &self.alphabet
    }

    /// Iterates over the proper symbols of the alphabet, i.e. everything except for ε.
    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.alphabet.iter().filter_map(|label| label.symbol())
    }

    /// Returns the set of all states.
    pub fn states(&self) -> &OrderedSet<Q> {
        &self.states
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the set of initial states, which is never empty.
    pub fn initial(&self) -> &OrderedSet<Q> {
        &self.initial
    }

    /// Returns the set of final states.
    pub fn final_states(&self) -> &OrderedSet<Q> {
        &self.final_states
    }

    /// Returns the set of all transitions.
    pub fn transitions(&self) -> &OrderedSet<Transition<Q, S>> {
        &self.transitions
    }

    /// Returns true if `state` is an initial state.
    pub fn is_initial(&self, state: &Q) -> bool {
        self.initial.contains(state)
    }

    /// Returns true if `state` is a final state.
    pub fn is_final(&self, state: &Q) -> bool {
        self.final_states.contains(state)
    }

    /// Returns true if the automaton is deterministic, which is the case if there is precisely one initial
    /// state, no ε-transition and every state has at most one successor per symbol. This is computed once
    /// upon construction.
    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// Returns true if at least one transition is labeled with ε.
    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.iter().any(|t| t.label.is_epsilon())
    }

    /// Returns the outgoing edges of `state`, grouped by their label.
    pub fn edges_from(&self, state: &Q) -> Option<&OrderedMap<Label<S>, OrderedSet<Q>>> {
        self.delta.get(state)
    }

    /// Iterates over all states that can be reached from `state` by a single transition labeled with `label`.
    pub fn successors<'a>(&'a self, state: &Q, label: &Label<S>) -> impl Iterator<Item = &'a Q> + 'a {
        self.delta
            .get(state)
            .and_then(|edges| edges.get(label))
            .into_iter()
            .flatten()
    }

    /// Iterates over all transitions that leave one of the given states, yielding label and target.
    pub(crate) fn outgoing<'a, I>(&'a self, states: I) -> impl Iterator<Item = (&'a Label<S>, &'a Q)> + 'a
    where
        I: IntoIterator<Item = &'a Q>,
        I::IntoIter: 'a,
    {
        states
            .into_iter()
            .filter_map(|q| self.delta.get(q))
            .flat_map(|edges| {
                edges
                    .iter()
                    .flat_map(|(label, targets)| targets.iter().map(move |target| (label, target)))
            })
    }

    /// Decides whether the given word is accepted, i.e. whether there is a run on the word, possibly
    /// interleaved with ε-transitions, that leads from an initial state to a final state.
    pub fn accepts<W: IntoIterator<Item = S>>(&self, word: W) -> bool {
        let mut current = self.epsilon_closure(self.initial.iter().cloned());
        for symbol in word {
            current = self.step(&current, &symbol);
            if current.is_empty() {
                return false;
            }
        }
        !current.is_disjoint(&self.final_states)
    }

    /// Renames every state by applying `f`. The result is validated anew, in particular it is an error if
    /// `f` maps two distinct states to the same name. This can be used to make the states of two automata
    /// disjoint before they are combined.
    pub fn map_states<P: State, F: FnMut(&Q) -> P>(
        &self,
        mut f: F,
    ) -> Result<Automaton<P, S>, AutomatonError> {
        let mut renaming: OrderedMap<Q, P> = OrderedMap::new();
        let mut preimage: OrderedMap<P, Q> = OrderedMap::new();
        for q in &self.states {
            let p = f(q);
            if let Some(other) = preimage.insert(p.clone(), q.clone()) {
                return Err(AutomatonError::NonInjective {
                    left: other.show(),
                    right: q.show(),
                });
            }
            renaming.insert(q.clone(), p);
        }
        Ok(self.relabel(|q| renaming[q].clone()))
    }

    /// Renumbers the states as `0, 1, ...` in ascending order and returns the resulting automaton together
    /// with the bijection between the new indices and the original states.
    pub fn canonicalize(&self) -> (Automaton<usize, S>, Bijection<usize, Q>) {
        let indices: Bijection<usize, Q> = self.states.iter().cloned().enumerate().collect();
        let renamed = self.relabel(|q| {
            *indices
                .get_by_right(q)
                .expect("every state was assigned an index")
        });
        (renamed, indices)
    }

    /// Applies a renaming that must be injective on the states of `self`, which preserves validity.
    pub(crate) fn relabel<P: State, F: Fn(&Q) -> P>(&self, f: F) -> Automaton<P, S> {
        Automaton::from_validated_parts(
            self.alphabet.clone(),
            self.states.iter().map(&f).collect(),
            self.initial.iter().map(&f).collect(),
            self.transitions
                .iter()
                .map(|t| Transition {
                    start: f(&t.start),
                    label: t.label.clone(),
                    end: f(&t.end),
                })
                .collect(),
            self.final_states.iter().map(&f).collect(),
        )
    }
}

impl<Q: State, S: Symbol> Display for Automaton<Q, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Σ: {}, Q: {}, I: {}, Δ: {}, F: {}>",
            Label::show_collection(&self.alphabet),
            Q::show_collection(&self.states),
            Q::show_collection(&self.initial),
            Transition::show_collection(&self.transitions),
            Q::show_collection(&self.final_states),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{five_state_nfa, transitions};
    use crate::prelude::*;

    #[test]
    fn construction_and_determinism() {
        let nfa = five_state_nfa();
        assert!(!nfa.is_deterministic());
        assert!(nfa.has_epsilon_transitions());
        assert_eq!(nfa.size(), 5);
        assert_eq!(nfa.symbols().copied().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(
            nfa.successors(&0, &Label::Epsilon).copied().collect::<Vec<_>>(),
            vec![2]
        );

        let dfa: Automaton = Automaton::from_table(
            [0],
            [1],
            transitions(&[(0, 'a', 1), (1, 'a', 1), (1, 'b', 0)], &[]),
        )
        .unwrap();
        assert!(dfa.is_deterministic());
        assert_eq!(dfa.alphabet().len(), 2);
    }

    #[test]
    fn nondeterministic_branching_and_multiple_initial_states() {
        let branching: Automaton =
            Automaton::from_table([0], [1], transitions(&[(0, 'a', 0), (0, 'a', 1)], &[]))
                .unwrap();
        assert!(!branching.is_deterministic());
        assert_eq!(branching.successors(&0, &'a'.into()).count(), 2);

        let two_initial: Automaton =
            Automaton::from_table([0, 1], [1], transitions(&[(0, 'a', 1)], &[])).unwrap();
        assert!(!two_initial.is_deterministic());
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Automaton::<u32, char>::new(['a'], [0, 1], [2], [], [1]),
            Err(AutomatonError::InitialNotInStates("2".to_string()))
        );
        assert_eq!(
            Automaton::<u32, char>::new(['a'], [0, 1], [0], [], [5]),
            Err(AutomatonError::FinalNotInStates("5".to_string()))
        );
        assert_eq!(
            Automaton::<u32, char>::new(['a'], [0, 1], [], [], [1]),
            Err(AutomatonError::EmptyInitial)
        );
        assert!(matches!(
            Automaton::<u32, char>::new(['a'], [0, 1], [0], [Transition::new(0, 'a', 7)], [1]),
            Err(AutomatonError::UnknownTransitionState { state, .. }) if state == "7"
        ));
        assert!(matches!(
            Automaton::<u32, char>::new(['a'], [0, 1], [0], [Transition::new(0, 'b', 1)], [1]),
            Err(AutomatonError::UnknownLabel { label, .. }) if label == "b"
        ));
        // the initial state 3 does not occur on any transition
        assert!(Automaton::<u32, char>::from_table([3], [1], [Transition::new(0, 'a', 1)]).is_err());
    }

    #[test]
    fn epsilon_is_always_permitted() {
        let aut = Automaton::<u32, char>::new(['a'], [0, 1], [0], [Transition::epsilon(0, 1)], [1])
            .unwrap();
        assert!(aut.accepts([]));
        assert!(!aut.alphabet().contains(&Label::Epsilon));
    }

    #[test]
    fn empty_final_set_accepts_nothing() {
        let aut: Automaton =
            Automaton::new(['a'], [0], [0], [Transition::new(0, 'a', 0)], []).unwrap();
        assert!(!aut.accepts([]));
        assert!(!aut.accepts("aaa".chars()));
    }

    #[test]
    fn membership() {
        let nfa = five_state_nfa();
        assert!(nfa.accepts([]));
        assert!(nfa.accepts("a".chars()));
        assert!(nfa.accepts("b".chars()));
        assert!(nfa.accepts("ab".chars()));
        assert!(nfa.accepts("aab".chars()));
        assert!(!nfa.accepts("c".chars()));
    }

    #[test]
    fn renaming() {
        let nfa = five_state_nfa();
        let shifted = nfa.map_states(|q| q + 10).unwrap();
        assert_eq!(shifted.initial().iter().copied().collect::<Vec<_>>(), vec![10, 11]);
        assert!(shifted.accepts("ab".chars()));

        assert!(matches!(
            nfa.map_states(|q| q / 2),
            Err(AutomatonError::NonInjective { .. })
        ));

        let named = nfa.map_states(|q| format!("q{q}")).unwrap();
        assert!(named.is_final(&"q4".to_string()));

        let (canonical, indices) = named.canonicalize();
        assert_eq!(canonical.size(), 5);
        assert_eq!(indices.get_by_left(&0), Some(&"q0".to_string()));
        assert!(canonical.accepts("ab".chars()));
    }

    #[test]
    fn display() {
        let aut: Automaton =
            Automaton::from_table([0], [1], transitions(&[(0, 'a', 1)], &[(1, 0)])).unwrap();
        assert_eq!(
            aut.to_string(),
            "<Σ: {ε, a}, Q: {0, 1}, I: {0}, Δ: {<0, a, 1>, <1, ε, 0>}, F: {1}>"
        );
    }
}
