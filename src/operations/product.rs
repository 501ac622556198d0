use std::collections::VecDeque;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    math::{OrderedSet, Set},
    prelude::*,
};

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Computes the product automaton of `self` and `other`, which accepts precisely the words that are
    /// accepted by both automata. Its states are pairs of states, a pair being final if both of its
    /// components are final. Only pairs that are reachable from a pair of initial states are constructed,
    /// and only symbols that occur in both alphabets are considered.
    ///
    /// Both automata must be free of ε-transitions, otherwise [`AutomatonError::EpsilonTransitions`] is
    /// returned. Automata with ε-transitions can be made ε-free with [`Automaton::determinize`] first.
    /// As states of the product are pairs, the operands do not need to have disjoint states, so unlike
    /// union and concatenation this never returns [`AutomatonError::NotDisjoint`].
    pub fn intersection<P: State>(
        &self,
        other: &Automaton<P, S>,
    ) -> Result<Automaton<(Q, P), S>, AutomatonError> {
        if self.has_epsilon_transitions() || other.has_epsilon_transitions() {
            debug!("refusing intersection of automata with ε-transitions");
            return Err(AutomatonError::EpsilonTransitions {
                operation: "intersection",
            });
        }

        let symbols: Vec<S> = self
            .symbols()
            .filter(|sym| other.alphabet().contains(&Label::Symbol((*sym).clone())))
            .cloned()
            .collect();

        let initial: OrderedSet<(Q, P)> = self
            .initial()
            .iter()
            .cartesian_product(other.initial().iter())
            .map(|(q, p)| (q.clone(), p.clone()))
            .collect();

        let mut seen: Set<(Q, P)> = initial.iter().cloned().collect();
        let mut queue: VecDeque<(Q, P)> = initial.iter().cloned().collect();
        let mut transitions: OrderedSet<Transition<(Q, P), S>> = OrderedSet::new();

        while let Some(pair) = queue.pop_front() {
            for sym in &symbols {
                let label = Label::Symbol(sym.clone());
                let right: Vec<&P> = other.successors(&pair.1, &label).collect();
                for (q, p) in self.successors(&pair.0, &label).cartesian_product(right) {
                    let target = (q.clone(), p.clone());
                    if seen.insert(target.clone()) {
                        queue.push_back(target.clone());
                    }
                    transitions.insert(Transition {
                        start: pair.clone(),
                        label: label.clone(),
                        end: target,
                    });
                }
            }
        }

        let states: OrderedSet<(Q, P)> = seen.into_iter().collect();
        let final_states: OrderedSet<(Q, P)> = states
            .iter()
            .filter(|(q, p)| self.is_final(q) && other.is_final(p))
            .cloned()
            .collect();
        trace!(
            "product has {} reachable states of which {} are final",
            states.len(),
            final_states.len()
        );

        Automaton::new(symbols, states, initial, transitions, final_states)
    }
}
