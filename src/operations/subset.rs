use std::collections::VecDeque;

use bit_set::BitSet;
use tracing::{debug, trace};

use crate::{
    math::{Bijection, Map, OrderedSet},
    prelude::*,
};

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Runs the subset construction and produces a deterministic automaton that accepts the same language.
    /// Every state of the result is a [`StateSet`] of states of `self`, the initial state is the ε-closure
    /// of all initial states and a set is final if it contains at least one final state. Sets that are not
    /// reachable from the initial set are never constructed. If no state of a set has a successor on some
    /// symbol, there is no transition on that symbol, i.e. the result may be partial.
    ///
    /// The result never has ε-transitions and its alphabet consists of the proper symbols of `self`. An
    /// automaton that is already deterministic is returned as is, with each state `q` wrapped into `{q}`.
    ///
    /// # Example
    /// ```
    /// use regular_automata::prelude::*;
    ///
    /// let nfa: Automaton = Automaton::builder()
    ///     .with_transitions([(0, 'a', 0), (0, 'a', 1), (0, 'b', 1), (1, 'b', 1), (1, 'a', 0)])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .build()
    ///     .unwrap();
    /// let dfa = nfa.determinize();
    /// assert!(dfa.is_deterministic());
    /// assert_eq!(dfa.size(), 3);
    /// assert!(dfa.is_final(&StateSet::from_iter([0, 1])));
    /// ```
    pub fn determinize(&self) -> Automaton<StateSet<Q>, S> {
        if self.is_deterministic() {
            debug!("automaton is already deterministic, wrapping states into singletons");
            let wrapped = self.relabel(|q| StateSet::singleton(q.clone()));
            // ε may be part of the alphabet even though no transition uses it
            return Automaton::from_validated_parts(
                wrapped.symbols().cloned().map(Label::Symbol).collect(),
                wrapped.states().clone(),
                wrapped.initial().clone(),
                wrapped.transitions().clone(),
                wrapped.final_states().clone(),
            );
        }
        SubsetConstruction::new(self).run()
    }
}

/// Performs the subset construction for a given automaton. The states of the automaton are stored in an
/// arena, such that a set of states can be represented as a [`BitSet`] of indices. The ε-closure of every
/// state is computed once and each set of states that is encountered is interned, so it is expanded at
/// most once.
///
/// Usually this is not used directly, see [`Automaton::determinize`].
pub struct SubsetConstruction<'a, Q, S> {
    aut: &'a Automaton<Q, S>,
    arena: Bijection<usize, Q>,
    closures: Vec<BitSet>,
    composites: Vec<BitSet>,
    interned: Map<BitSet, usize>,
}

impl<'a, Q: State, S: Symbol> SubsetConstruction<'a, Q, S> {
    /// Prepares the subset construction for `aut`, which assigns an index to every state and precomputes
    /// all ε-closures.
    pub fn new(aut: &'a Automaton<Q, S>) -> Self {
        let arena: Bijection<usize, Q> = aut.states().iter().cloned().enumerate().collect();
        let closures = aut
            .states()
            .iter()
            .map(|q| {
                aut.epsilon_closure([q.clone()])
                    .iter()
                    .filter_map(|p| arena.get_by_right(p).copied())
                    .collect()
            })
            .collect();

        Self {
            aut,
            arena,
            closures,
            composites: vec![],
            interned: Map::default(),
        }
    }

    /// Returns the union of the ε-closures of all given states.
    fn close<'b, I: IntoIterator<Item = &'b Q>>(&self, states: I) -> BitSet
    where
        Q: 'b,
    {
        let mut out = BitSet::new();
        for idx in states
            .into_iter()
            .filter_map(|q| self.arena.get_by_right(q))
        {
            out.union_with(&self.closures[*idx]);
        }
        out
    }

    /// Computes the ε-closed set of states reached from `composite` on `label`.
    fn successor(&self, composite: &BitSet, label: &Label<S>) -> BitSet {
        self.close(
            composite
                .iter()
                .filter_map(|idx| self.arena.get_by_left(&idx))
                .flat_map(|q| self.aut.successors(q, label)),
        )
    }

    /// Looks up the identifier of `composite`, assigning a new one if it has not been seen before. The
    /// returned flag indicates whether the composite is new.
    fn intern(&mut self, composite: BitSet) -> (usize, bool) {
        if let Some(id) = self.interned.get(&composite) {
            return (*id, false);
        }
        let id = self.composites.len();
        trace!("discovered composite state {id} with {} members", composite.len());
        self.interned.insert(composite.clone(), id);
        self.composites.push(composite);
        (id, true)
    }

    fn expand(&self, composite: &BitSet) -> StateSet<Q> {
        composite
            .iter()
            .filter_map(|idx| self.arena.get_by_left(&idx).cloned())
            .collect()
    }

    /// Explores all sets of states that are reachable from the initial set and assembles the resulting
    /// deterministic automaton.
    pub fn run(mut self) -> Automaton<StateSet<Q>, S> {
        let labels: Vec<Label<S>> = self.aut.symbols().cloned().map(Label::Symbol).collect();

        let initial = self.close(self.aut.initial());
        let (initial_id, _) = self.intern(initial);
        let mut queue = VecDeque::from([initial_id]);
        let mut edges: Vec<(usize, Label<S>, usize)> = vec![];

        while let Some(source) = queue.pop_front() {
            for label in &labels {
                let target = self.successor(&self.composites[source], label);
                if target.is_empty() {
                    continue;
                }
                let (target, is_new) = self.intern(target);
                if is_new {
                    queue.push_back(target);
                }
                edges.push((source, label.clone(), target));
            }
        }

        let finals: BitSet = self
            .aut
            .final_states()
            .iter()
            .filter_map(|q| self.arena.get_by_right(q).copied())
            .collect();

        let states: Vec<StateSet<Q>> = self.composites.iter().map(|c| self.expand(c)).collect();
        let final_states: OrderedSet<StateSet<Q>> = self
            .composites
            .iter()
            .zip(&states)
            .filter(|(composite, _)| !composite.is_disjoint(&finals))
            .map(|(_, set)| set.clone())
            .collect();
        let transitions: OrderedSet<Transition<StateSet<Q>, S>> = edges
            .into_iter()
            .map(|(source, label, target)| Transition {
                start: states[source].clone(),
                label,
                end: states[target].clone(),
            })
            .collect();
        debug!(
            "subset construction turned {} states into {} sets of states",
            self.aut.size(),
            states.len()
        );

        Automaton::from_validated_parts(
            labels.into_iter().collect(),
            states.iter().cloned().collect(),
            OrderedSet::from([states[initial_id].clone()]),
            transitions,
            final_states,
        )
    }
}
