use fastrand::Rng;
use tracing::debug;

use crate::{math::OrderedSet, prelude::*};

/// Parameters for [`random_automaton`]. All probabilities are expected to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomConfig {
    /// Number of states, which are the numbers `0` up to `states - 1`. At least one state is created.
    pub states: u32,
    /// Number of symbols, taken from the lowercase letters starting with `a`. At most 26 symbols are used.
    pub symbols: usize,
    /// Probability with which a transition between two states on a given symbol is added.
    pub density: f64,
    /// Probability with which an ε-transition between two distinct states is added.
    pub epsilon_density: f64,
    /// Probability with which a state is final.
    pub final_probability: f64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            states: 4,
            symbols: 2,
            density: 0.3,
            epsilon_density: 0.1,
            final_probability: 0.3,
        }
    }
}

impl RandomConfig {
    /// Creates a configuration for the given number of states and symbols, all probabilities are taken
    /// from [`RandomConfig::default`].
    pub fn new(states: u32, symbols: usize) -> Self {
        Self {
            states,
            symbols,
            ..Default::default()
        }
    }

    /// Sets the probability of symbol transitions.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the probability of ε-transitions, use `0.0` for automata without ε-transitions.
    pub fn with_epsilon_density(mut self, epsilon_density: f64) -> Self {
        self.epsilon_density = epsilon_density;
        self
    }

    /// Sets the probability with which a state is final.
    pub fn with_final_probability(mut self, final_probability: f64) -> Self {
        self.final_probability = final_probability;
        self
    }
}

/// Draws a random automaton according to `config`. The algorithm is as follows:
/// 1. Create the states `0, ..., n-1`, where `0` is the only initial state.
/// 2. For every pair of states and every symbol, add a transition with probability `config.density`.
/// 3. For every pair of distinct states, add an ε-transition with probability `config.epsilon_density`.
/// 4. Make every state final with probability `config.final_probability`. If no state was picked, a
///    uniformly drawn state is made final instead.
///
/// The result need not be deterministic, and states may be unreachable. Using a seeded [`Rng`] makes
/// the outcome reproducible.
pub fn random_automaton(rng: &mut Rng, config: &RandomConfig) -> Automaton<u32, char> {
    let size = config.states.max(1);
    let symbols: Vec<char> = ('a'..='z').take(config.symbols).collect();

    let mut transitions = OrderedSet::new();
    for p in 0..size {
        for sym in &symbols {
            for q in 0..size {
                if rng.f64() < config.density {
                    transitions.insert(Transition::new(p, *sym, q));
                }
            }
        }
        for q in (0..size).filter(|q| *q != p) {
            if rng.f64() < config.epsilon_density {
                transitions.insert(Transition::epsilon(p, q));
            }
        }
    }

    let mut final_states: OrderedSet<u32> = (0..size)
        .filter(|_| rng.f64() < config.final_probability)
        .collect();
    if final_states.is_empty() {
        final_states.insert(rng.u32(0..size));
    }

    debug!(
        "drew random automaton with {size} states, {} transitions and {} final states",
        transitions.len(),
        final_states.len()
    );
    Automaton::from_validated_parts(
        symbols.into_iter().map(Label::Symbol).collect(),
        (0..size).collect(),
        OrderedSet::from([0]),
        transitions,
        final_states,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: u64 = 40;
    const MAX_LEN: usize = 5;

    fn words() -> impl Iterator<Item = Vec<char>> {
        FreeMonoid::new(vec!['a', 'b']).up_to(MAX_LEN)
    }

    /// Draws pairs of random automata whose states are disjoint.
    fn random_pairs(config: RandomConfig) -> impl Iterator<Item = (Automaton, Automaton)> {
        (0..SEEDS).map(move |seed| {
            let mut rng = Rng::with_seed(seed);
            let left = random_automaton(&mut rng, &config);
            let right = random_automaton(&mut rng, &config)
                .map_states(|q| q + 100)
                .unwrap();
            (left, right)
        })
    }

    #[test]
    fn generation_is_reproducible_and_valid() {
        let config = RandomConfig::new(6, 3).with_epsilon_density(0.2);
        let first = random_automaton(&mut Rng::with_seed(7), &config);
        let second = random_automaton(&mut Rng::with_seed(7), &config);
        assert_eq!(first, second);
        assert_eq!(first.size(), 6);
        assert_eq!(first.symbols().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert!(first.is_initial(&0));
        assert!(!first.final_states().is_empty());

        let tiny = random_automaton(&mut Rng::with_seed(1), &RandomConfig::new(0, 1));
        assert_eq!(tiny.size(), 1);
        assert!(tiny.is_final(&0));
    }

    #[test]
    fn extreme_probabilities() {
        let empty = RandomConfig::new(3, 2)
            .with_density(0.0)
            .with_epsilon_density(0.0)
            .with_final_probability(0.0);
        let aut = random_automaton(&mut Rng::with_seed(5), &empty);
        assert!(aut.transitions().is_empty());
        assert_eq!(aut.final_states().len(), 1);

        let full = RandomConfig::new(3, 2)
            .with_density(1.0)
            .with_epsilon_density(0.0)
            .with_final_probability(1.0);
        let aut = random_automaton(&mut Rng::with_seed(5), &full);
        assert_eq!(aut.transitions().len(), 3 * 2 * 3);
        assert_eq!(aut.final_states(), aut.states());
    }

    #[test_log::test]
    fn determinization_preserves_language() {
        for (aut, _) in random_pairs(RandomConfig::default()) {
            let dfa = aut.determinize();
            assert!(dfa.is_deterministic());
            for word in words() {
                assert_eq!(aut.accepts(word.clone()), dfa.accepts(word.clone()), "{aut}");
            }
        }
    }

    #[test]
    fn intersection_is_conjunction() {
        for (left, right) in random_pairs(RandomConfig::default().with_epsilon_density(0.0)) {
            let product = left.intersection(&right).unwrap();
            for word in words() {
                assert_eq!(
                    product.accepts(word.clone()),
                    left.accepts(word.clone()) && right.accepts(word.clone()),
                    "{word:?}"
                );
            }
        }
    }

    #[test]
    fn union_is_disjunction() {
        for (left, right) in random_pairs(RandomConfig::default()) {
            let union = left.union(&right).unwrap();
            assert!(union.initial().iter().all(|q| !left.states().contains(q)));
            for word in words() {
                assert_eq!(
                    union.accepts(word.clone()),
                    left.accepts(word.clone()) || right.accepts(word.clone()),
                    "{word:?}"
                );
            }
        }
    }

    #[test]
    fn concatenation_accepts_all_splits() {
        for (left, right) in random_pairs(RandomConfig::default()) {
            let concatenated = left.concatenation(&right).unwrap();
            for word in words() {
                let split =
                    (0..=word.len()).any(|i| {
                        left.accepts(word[..i].to_vec()) && right.accepts(word[i..].to_vec())
                    });
                assert_eq!(concatenated.accepts(word.clone()), split, "{word:?}");
            }
        }
    }

    #[test]
    fn star_accepts_all_factorizations() {
        for (aut, _) in random_pairs(RandomConfig::default()) {
            let star = aut.kleene_star().unwrap();
            for word in words() {
                // factorizable[j] holds if the prefix of length j is a concatenation of accepted words
                let mut factorizable = vec![false; word.len() + 1];
                factorizable[0] = true;
                for j in 1..=word.len() {
                    factorizable[j] =
                        (0..j).any(|i| factorizable[i] && aut.accepts(word[i..j].to_vec()));
                }
                assert_eq!(star.accepts(word.clone()), factorizable[word.len()], "{word:?}");
            }
        }
    }

    #[test]
    fn closure_is_idempotent() {
        for (aut, _) in random_pairs(RandomConfig::new(8, 2).with_epsilon_density(0.3)) {
            let closure = aut.epsilon_closure(aut.initial().iter().copied());
            assert!(aut.initial().is_subset(&closure));
            assert_eq!(aut.epsilon_closure(closure.iter().copied()), closure);
        }
    }

    #[test]
    fn enumeration_is_sound() {
        for (aut, _) in random_pairs(RandomConfig::new(2, 2)) {
            let language = aut.language();
            assert_eq!(aut.language(), language);
            for entry in &language {
                for k in 0..3 {
                    assert!(aut.accepts(entry.unroll(k)), "{entry} in {aut}");
                }
            }
        }
    }
}
