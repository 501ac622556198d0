use std::{fmt::Debug, hash::Hash};

use crate::{math::OrderedSet, Show};

/// A state of an automaton. States are opaque identifiers which are only ever compared for equality (and
/// ordered, so that automata can be stored and rendered deterministically). Every type that is ordered,
/// hashable and can be shown is a state.
pub trait State: Clone + Eq + Ord + Hash + Debug + Show {}
impl<Q: Clone + Eq + Ord + Hash + Debug + Show> State for Q {}

/// States for which we can invent a new identifier that differs from all identifiers in a given set. This is
/// needed by operations like [`crate::Automaton::union`] which introduce a new initial state.
///
/// The search for a fresh identifier is scoped to the call, there is no global counter involved.
pub trait FreshState: State {
    /// Returns a state that is not contained in `taken`, or `None` if the identifier space of `Self`
    /// is exhausted.
    fn fresh(taken: &OrderedSet<Self>) -> Option<Self>;
}

macro_rules! impl_fresh_for_integers {
    ($($ty:ty),*) => {
        $(
            impl FreshState for $ty {
                fn fresh(taken: &OrderedSet<Self>) -> Option<Self> {
                    (0..=<$ty>::MAX).find(|candidate| !taken.contains(candidate))
                }
            }
        )*
    };
}

impl_fresh_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl FreshState for char {
    fn fresh(taken: &OrderedSet<Self>) -> Option<Self> {
        ('a'..='z')
            .chain('A'..='Z')
            .chain('\u{c0}'..=char::MAX)
            .find(|candidate| !taken.contains(candidate))
    }
}

impl FreshState for String {
    /// Single lowercase letters are tried first, after that the positive integers `"1"`, `"2"`, ...
    fn fresh(taken: &OrderedSet<Self>) -> Option<Self> {
        ('a'..='z')
            .map(|c| c.to_string())
            .chain((1..=u64::MAX).map(|i| i.to_string()))
            .find(|candidate| !taken.contains(candidate))
    }
}

impl<A: FreshState, B: FreshState> FreshState for (A, B) {
    /// Only the first component has to be fresh for the pair to be fresh.
    fn fresh(taken: &OrderedSet<Self>) -> Option<Self> {
        let firsts: OrderedSet<A> = taken.iter().map(|(a, _)| a.clone()).collect();
        Some((A::fresh(&firsts)?, B::fresh(&OrderedSet::new())?))
    }
}

/// An immutable set of states, which is used as a single (composite) state. The subset construction
/// produces automata whose states are of this type.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateSet<Q>(OrderedSet<Q>);

impl<Q: Ord> StateSet<Q> {
    /// Creates the set containing only `state`.
    pub fn singleton(state: Q) -> Self {
        Self(OrderedSet::from([state]))
    }

    /// Returns true if `state` is a member of `self`.
    pub fn contains(&self, state: &Q) -> bool {
        self.0.contains(state)
    }

    /// Returns true if `self` and `other` share at least one member.
    pub fn intersects(&self, other: &OrderedSet<Q>) -> bool {
        !self.0.is_disjoint(other)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Q> + '_ {
        self.0.iter()
    }

    /// Gives read access to the underlying ordered set.
    pub fn as_set(&self) -> &OrderedSet<Q> {
        &self.0
    }
}

impl<Q: Ord> FromIterator<Q> for StateSet<Q> {
    fn from_iter<T: IntoIterator<Item = Q>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<Q: Ord> From<OrderedSet<Q>> for StateSet<Q> {
    fn from(value: OrderedSet<Q>) -> Self {
        Self(value)
    }
}

impl<'a, Q> IntoIterator for &'a StateSet<Q> {
    type Item = &'a Q;
    type IntoIter = std::collections::btree_set::Iter<'a, Q>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<Q: Show> Show for StateSet<Q> {
    fn show(&self) -> String {
        Q::show_collection(self.0.iter())
    }
}

impl<Q: FreshState> FreshState for StateSet<Q> {
    /// Produces a singleton containing a state that occurs in none of the taken sets.
    fn fresh(taken: &OrderedSet<Self>) -> Option<Self> {
        let members: OrderedSet<Q> = taken.iter().flat_map(|set| set.iter().cloned()).collect();
        Some(StateSet::singleton(Q::fresh(&members)?))
    }
}
