//! Library for working with finite automata over finite words in Rust.
//!
//! An [`Automaton`] consists of an alphabet, a finite set of states, a non-empty set of initial states, a set of
//! final (accepting) states and a set of transitions. Each transition is a triple `(start, label, end)` where the label
//! is either a symbol of the alphabet or the empty label ε (see [`Label`]). Automata are immutable values: they are
//! validated once upon construction and every operation produces a new automaton instead of modifying an existing one.
//!
//! The crate implements the algebra of regular languages on top of this representation:
//! - [`Automaton::epsilon_closure`] computes the states reachable through ε-transitions only,
//! - [`Automaton::union`], [`Automaton::concatenation`] and [`Automaton::kleene_star`] combine automata by splicing
//!   the outgoing transitions of initial states,
//! - [`Automaton::intersection`] computes the product automaton over pairs of states,
//! - [`Automaton::determinize`] runs the subset construction, producing an automaton whose states are
//!   [`StateSet`]s of the original states,
//! - [`Automaton::language`] gives a finite, symbolic description of the (possibly infinite) accepted language, where
//!   cycles are summarized as `prefix(cycle)...` instead of being unrolled.
//!
//! States and symbols can be of any type implementing [`State`] respectively [`Symbol`], which are blanket implemented
//! for everything that is ordered, hashable and can be displayed through [`Show`]. Operations that need to invent a new
//! state (union and star) additionally require [`FreshState`].
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use regular_automata::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{FreeMonoid, Label, Symbol},
        automaton::{Automaton, AutomatonBuilder, Transition},
        error::AutomatonError,
        language::{Language, SymbolicWord},
        math,
        state::{FreshState, State, StateSet},
        Show,
    };

    #[cfg(feature = "random")]
    pub use super::random::{random_automaton, RandomConfig};
}

/// This module contains type aliases for the collections which are used throughout the crate.
pub mod math;

/// Defines symbols and labels, including the empty label ε.
pub mod alphabet;
pub use alphabet::{Label, Symbol};

/// Defines what a state is and how fresh states are invented.
pub mod state;
pub use state::{FreshState, State, StateSet};

/// Contains the error type that is returned by all fallible operations.
pub mod error;
pub use error::AutomatonError;

/// Defines the [`Automaton`] type together with its construction and validation.
pub mod automaton;
pub use automaton::{Automaton, Transition};

/// Implements the operations of the regular-language algebra.
pub mod operations;

/// Symbolic enumeration of the language accepted by an automaton.
pub mod language;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;

/// Helper trait which can be used to display states, symbols, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`. For a state this could be `q0` or `3`, for a
    /// set of states something like `{0, 1}`. This is used for rendering automata and in error messages.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}
    /// and for a collection of transitions it should be {<q0, a, q1>, <q1, b, q2>, ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

macro_rules! impl_show_via_to_string {
    ($($ty:ty),*) => {
        $(
            impl Show for $ty {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_show_via_to_string!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        self.iter().map(|x| x.show()).join("")
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
