use std::{collections::VecDeque, fmt::Display};

use tracing::{debug, trace};

use crate::{math::OrderedSet, prelude::*};

/// A finite description of a set of words. Either a single finite word, or a family of words in which a
/// cycle may be repeated arbitrarily often.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SymbolicWord<S> {
    /// A plain finite word, rendered as its symbols or `ε` if it is empty.
    Finite(Vec<S>),
    /// The words `prefix · cycle^k` for all `k`, rendered as `prefix(cycle)...`.
    Repeating {
        /// The word leading to the cycle.
        prefix: Vec<S>,
        /// The repeated part.
        cycle: Vec<S>,
    },
    /// The words `prefix · cycle^k · suffix` for all `k`, rendered as `prefix(cycle)...suffix`.
    Embedded {
        /// The word leading to the cycle.
        prefix: Vec<S>,
        /// The repeated part.
        cycle: Vec<S>,
        /// The word that follows the repetitions.
        suffix: Vec<S>,
    },
}

impl<S: Clone> SymbolicWord<S> {
    /// Creates a [`SymbolicWord::Repeating`], unless `cycle` is empty. As the empty cycle can only be repeated
    /// to give the empty word, the result is then just the finite word `prefix`.
    pub fn repeating(prefix: Vec<S>, cycle: Vec<S>) -> Self {
        if cycle.is_empty() {
            SymbolicWord::Finite(prefix)
        } else {
            SymbolicWord::Repeating { prefix, cycle }
        }
    }

    /// Returns true if `self` describes a single word.
    pub fn is_finite(&self) -> bool {
        matches!(self, SymbolicWord::Finite(_))
    }

    /// Produces the concrete word in which the cycle is repeated `repetitions` times. For a finite word,
    /// `repetitions` is ignored.
    pub fn unroll(&self, repetitions: usize) -> Vec<S> {
        match self {
            SymbolicWord::Finite(word) => word.clone(),
            SymbolicWord::Repeating { prefix, cycle } => prefix
                .iter()
                .chain(cycle.iter().cycle().take(cycle.len() * repetitions))
                .cloned()
                .collect(),
            SymbolicWord::Embedded {
                prefix,
                cycle,
                suffix,
            } => prefix
                .iter()
                .chain(cycle.iter().cycle().take(cycle.len() * repetitions))
                .chain(suffix.iter())
                .cloned()
                .collect(),
        }
    }
}

fn show_word<S: Show>(word: &[S]) -> String {
    if word.is_empty() {
        "ε".to_string()
    } else {
        word.show()
    }
}

impl<S: Show> Show for SymbolicWord<S> {
    fn show(&self) -> String {
        match self {
            SymbolicWord::Finite(word) => show_word(word),
            SymbolicWord::Repeating { prefix, cycle } => {
                format!("{}({})...", prefix.show(), cycle.show())
            }
            SymbolicWord::Embedded {
                prefix,
                cycle,
                suffix,
            } => format!("{}({})...{}", prefix.show(), cycle.show(), suffix.show()),
        }
    }
}

impl<S: Show> Display for SymbolicWord<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

/// The symbolic description of a language as it is computed by [`Automaton::language`].
pub type Language<S> = OrderedSet<SymbolicWord<S>>;

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Computes a finite, symbolic description of the language accepted by `self`. See
    /// [`Automaton::language_from`], which this calls with the initial states as seeds.
    pub fn language(&self) -> Language<S> {
        self.language_from(self.initial().iter().cloned())
    }

    /// Explores all paths starting in one of the `seeds` in breadth-first order and collects the words
    /// that lead to a final state. To guarantee termination, cycles are not unrolled. Whenever a final
    /// state is reached, the number of its previous occurrences on the path decides what is recorded:
    /// - none: the labels form a [`SymbolicWord::Finite`] word,
    /// - one: the labels since that occurrence form a cycle, which gives a [`SymbolicWord::Repeating`],
    /// - two: the labels between the occurrences form a cycle followed by a suffix, which gives a
    ///   [`SymbolicWord::Embedded`]. If that cycle consists of ε-transitions only, nothing is recorded and the
    ///   path is not explored further.
    ///
    /// Paths on which some state occurs more than three times are abandoned. As ε is the neutral element of
    /// concatenation, ε-labels do not show up in the resulting words. The result is only an approximation of
    /// the language, but it is computed deterministically.
    ///
    /// # Example
    /// ```
    /// use regular_automata::prelude::*;
    ///
    /// let aut: Automaton = Automaton::builder()
    ///     .with_transitions([(0, 'x', 1), (1, 'a', 1)])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .build()
    ///     .unwrap();
    /// let language = aut.language();
    /// assert!(language.contains(&SymbolicWord::Finite(vec!['x'])));
    /// assert!(language.iter().any(|word| word.to_string() == "x(a)..."));
    /// ```
    pub fn language_from<I: IntoIterator<Item = Q>>(&self, seeds: I) -> Language<S> {
        let mut language = Language::new();
        let mut queue: VecDeque<(Q, Vec<Label<S>>, Vec<Q>)> = seeds
            .into_iter()
            .map(|seed| (seed, vec![], vec![]))
            .collect();

        while let Some((state, labels, path)) = queue.pop_front() {
            let occurrences: Vec<usize> = path
                .iter()
                .enumerate()
                .filter_map(|(i, q)| (q == &state).then_some(i))
                .collect();
            if occurrences.len() > 2 {
                continue;
            }

            if self.is_final(&state) {
                let word = match occurrences.as_slice() {
                    [] => SymbolicWord::Finite(Label::erase_epsilon(&labels)),
                    [i] => SymbolicWord::repeating(
                        Label::erase_epsilon(&labels[..*i]),
                        Label::erase_epsilon(&labels[*i..]),
                    ),
                    [i, j, ..] => {
                        let cycle = Label::erase_epsilon(&labels[*i..*j]);
                        if cycle.is_empty() {
                            trace!("abandoning path through ε-cycle at {}", state.show());
                            continue;
                        }
                        SymbolicWord::Embedded {
                            prefix: Label::erase_epsilon(&labels[..*i]),
                            cycle,
                            suffix: Label::erase_epsilon(&labels[*j..]),
                        }
                    }
                };
                language.insert(word);
            }

            for (label, target) in self.outgoing([&state]) {
                let mut labels = labels.clone();
                labels.push(label.clone());
                let mut path = path.clone();
                path.push(state.clone());
                queue.push_back((target.clone(), labels, path));
            }
        }

        debug!("symbolic language consists of {} entries", language.len());
        language
    }

    /// Computes all accepted words whose length is at most `max_len`. Unlike [`Automaton::language`], this
    /// enumerates concrete words and thus always gives an exact answer, at the price of being bounded.
    pub fn words_up_to(&self, max_len: usize) -> OrderedSet<Vec<S>> {
        let mut words = OrderedSet::new();
        let mut queue: VecDeque<(Vec<S>, OrderedSet<Q>)> =
            VecDeque::from([(vec![], self.epsilon_closure(self.initial().iter().cloned()))]);
        let symbols: Vec<S> = self.symbols().cloned().collect();

        while let Some((word, current)) = queue.pop_front() {
            if !current.is_disjoint(self.final_states()) {
                words.insert(word.clone());
            }
            if word.len() >= max_len {
                continue;
            }
            for symbol in &symbols {
                let next = self.step(&current, symbol);
                if next.is_empty() {
                    continue;
                }
                let mut extended = word.clone();
                extended.push(symbol.clone());
                queue.push_back((extended, next));
            }
        }

        trace!("found {} words of length at most {max_len}", words.len());
        words
    }
}
