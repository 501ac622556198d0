use thiserror::Error;

/// Errors that can occur when constructing or combining automata. States and labels are
/// embedded in their [`crate::Show`] representation, so the error type does not depend on
/// the state and symbol types of the automata involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// An initial state is not contained in the set of states.
    #[error("initial state `{0}` is not a state of the automaton")]
    InitialNotInStates(String),
    /// A final state is not contained in the set of states.
    #[error("final state `{0}` is not a state of the automaton")]
    FinalNotInStates(String),
    /// The set of initial states is empty.
    #[error("the set of initial states must not be empty")]
    EmptyInitial,
    /// A transition starts or ends in a state that does not exist.
    #[error("transition {transition} uses state `{state}` which is not a state of the automaton")]
    UnknownTransitionState {
        /// The offending transition.
        transition: String,
        /// The state that is missing.
        state: String,
    },
    /// A transition is labeled with a symbol that is not part of the alphabet.
    #[error("transition {transition} is labeled with `{label}` which is not in the alphabet")]
    UnknownLabel {
        /// The offending transition.
        transition: String,
        /// The label that is missing from the alphabet.
        label: String,
    },
    /// The operands of a union or concatenation share states, they need to be renamed first.
    #[error("automata must have disjoint states for {operation}, shared states are {shared}")]
    NotDisjoint {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// The states occurring in both operands.
        shared: String,
    },
    /// The intersection of automata with ε-transitions is not supported, determinize first.
    #[error("{operation} requires automata without ε-transitions, determinize first")]
    EpsilonTransitions {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// No state could be found that is not yet in use.
    #[error("could not find a fresh state, all identifiers are taken")]
    NoFreshState,
    /// Renaming the states would merge the distinct states `left` and `right`.
    #[error("renaming maps distinct states `{left}` and `{right}` to the same state")]
    NonInjective {
        /// The first of the merged states.
        left: String,
        /// The second of the merged states.
        right: String,
    },
}
