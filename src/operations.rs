//! The operators of the regular-language algebra. Every operator takes its operands by reference and
//! produces a new, validated [`Automaton`].
//!
//! Union, concatenation and star do not link the involved automata with ε-transitions. Instead, the
//! outgoing transitions of initial states are copied (spliced) onto the state from which the new behavior
//! should start. The original initial states keep all of their transitions and the new start state has no
//! incoming transitions, so every run of the result corresponds to a run of an operand.

use itertools::Itertools;
use tracing::debug;

use crate::{math::OrderedSet, prelude::*};

mod union;

mod concatenation;

mod star;

mod product;

mod subset;
pub use subset::SubsetConstruction;

/// Verifies that `left` and `right` do not share any state, which is required for combining them.
pub(crate) fn ensure_disjoint<Q: State, S: Symbol>(
    left: &Automaton<Q, S>,
    right: &Automaton<Q, S>,
    operation: &'static str,
) -> Result<(), AutomatonError> {
    let shared = left
        .states()
        .intersection(right.states())
        .collect::<Vec<_>>();
    if shared.is_empty() {
        return Ok(());
    }
    debug!("refusing {operation}, operands share {} states", shared.len());
    Err(AutomatonError::NotDisjoint {
        operation,
        shared: format!("{{{}}}", shared.into_iter().map(|q| q.show()).join(", ")),
    })
}

/// Collects the transitions leaving any initial state of `aut`, re-rooted so that they originate in `origin`.
pub(crate) fn splice_initial<'a, Q: State, S: Symbol>(
    aut: &'a Automaton<Q, S>,
    origin: &Q,
) -> impl Iterator<Item = Transition<Q, S>> + 'a {
    let origin = origin.clone();
    aut.outgoing(aut.initial()).map(move |(label, target)| Transition {
        start: origin.clone(),
        label: label.clone(),
        end: target.clone(),
    })
}

/// Returns true if some initial state of `aut` is also final, meaning it accepts the empty word without
/// taking a transition.
pub(crate) fn accepts_immediately<Q: State, S: Symbol>(aut: &Automaton<Q, S>) -> bool {
    !aut.initial().is_disjoint(aut.final_states())
}

/// Picks a state that occurs in none of the given automata.
pub(crate) fn fresh_state<'a, Q, S, I>(automata: I) -> Result<Q, AutomatonError>
where
    Q: FreshState + 'a,
    S: Symbol + 'a,
    I: IntoIterator<Item = &'a Automaton<Q, S>>,
{
    let taken: OrderedSet<Q> = automata
        .into_iter()
        .flat_map(|aut| aut.states().iter().cloned())
        .collect();
    Q::fresh(&taken).ok_or(AutomatonError::NoFreshState)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjointness_is_checked() {
        let left: Automaton = Automaton::builder()
            .with_transitions([(0, 'a', 1), (1, 'a', 2)])
            .with_initial([0])
            .build()
            .unwrap();
        let right: Automaton = Automaton::builder()
            .with_transitions([(2, 'b', 3), (3, 'b', 1)])
            .with_initial([2])
            .build()
            .unwrap();
        assert_eq!(
            ensure_disjoint(&left, &right, "union"),
            Err(AutomatonError::NotDisjoint {
                operation: "union",
                shared: "{1, 2}".to_string()
            })
        );

        let renamed = right.map_states(|q| q + 10).unwrap();
        assert!(ensure_disjoint(&left, &renamed, "union").is_ok());
        assert_eq!(fresh_state([&left, &renamed]), Ok(3));
    }
}
