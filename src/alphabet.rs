use std::{fmt::Debug, hash::Hash};

use crate::Show;

/// A symbol of an alphabet, which is also the type of the symbols in a word. Every type that is ordered,
/// hashable and can be shown is a symbol, the most common choice being `char`.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Show {}
impl<S: Clone + Eq + Ord + Hash + Debug + Show> Symbol for S {}

/// The label of a transition. This is either a proper [`Symbol`] or the empty label ε, which consumes no input.
///
/// All occurrences of ε compare (and hash) equal and ε is ordered before every symbol. When labels are
/// concatenated into a word, ε vanishes, i.e. `ε · w = w · ε = w`, see [`Label::erase_epsilon`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Label<S> {
    /// The empty label ε.
    Epsilon,
    /// A proper symbol of the alphabet.
    Symbol(S),
}

impl<S> Label<S> {
    /// Returns true if and only if `self` is the empty label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// Returns a reference to the underlying symbol, or `None` for ε.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(sym) => Some(sym),
        }
    }

    /// Concatenates a sequence of labels into a word, which drops all occurrences of ε.
    pub fn erase_epsilon<'a, I>(labels: I) -> Vec<S>
    where
        S: Clone + 'a,
        I: IntoIterator<Item = &'a Label<S>>,
    {
        labels
            .into_iter()
            .filter_map(|label| label.symbol().cloned())
            .collect()
    }
}

impl<S> From<S> for Label<S> {
    fn from(value: S) -> Self {
        Label::Symbol(value)
    }
}

impl<S: Show> Show for Label<S> {
    fn show(&self) -> String {
        match self {
            Label::Epsilon => "ε".to_string(),
            Label::Symbol(sym) => sym.show(),
        }
    }
}

/// Computes all elements of the free monoid over a set of given symbols.
/// In other words, it builds all finite words in length-lexicographic order
/// meaning words are computed in increasing length and sorted alphabetically
/// (with respect to the order in which the symbols are given).
#[derive(Debug, Clone)]
pub struct FreeMonoid<S> {
    symbols: Vec<S>,
    current: Option<Vec<usize>>,
}

impl<S: Clone> Iterator for FreeMonoid<S> {
    type Item = Vec<S>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let out = current.iter().map(|i| self.symbols[*i].clone()).collect();

        if self.symbols.is_empty() {
            // only the empty word exists
            self.current = None;
            return Some(out);
        }

        let mut carry = true;
        let mut i = current.len();
        while carry && i > 0 {
            i -= 1;
            current[i] += 1;
            if current[i] >= self.symbols.len() {
                current[i] = 0;
            } else {
                carry = false;
            }
        }

        if carry {
            *current = vec![0; current.len() + 1];
        }

        Some(out)
    }
}

impl<S> FreeMonoid<S> {
    /// Creates a new instance for the given vec of symbols, starting with the empty word.
    pub fn new(symbols: Vec<S>) -> Self {
        Self {
            symbols,
            current: Some(vec![]),
        }
    }
}

impl<S: Clone> FreeMonoid<S> {
    /// Returns an iterator over all words of length at most `max_len`, in length-lexicographic order.
    pub fn up_to(self, max_len: usize) -> impl Iterator<Item = Vec<S>> {
        self.take_while(move |word| word.len() <= max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_monoid_is_length_lexicographic() {
        let words: Vec<String> = FreeMonoid::new(vec!['a', 'b'])
            .up_to(2)
            .map(|w| w.into_iter().collect())
            .collect();
        assert_eq!(words, vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn free_monoid_over_empty_alphabet() {
        let words: Vec<Vec<char>> = FreeMonoid::new(vec![]).collect();
        assert_eq!(words, vec![Vec::<char>::new()]);
    }

    #[test]
    fn epsilon_vanishes_in_words() {
        let labels = [Label::Symbol('a'), Label::Epsilon, Label::Symbol('b'), Label::Epsilon];
        assert_eq!(Label::erase_epsilon(&labels), vec!['a', 'b']);
        assert!(Label::erase_epsilon(&[Label::<char>::Epsilon]).is_empty());
        assert!(Label::<char>::Epsilon < Label::Symbol('a'));
        assert_eq!(Label::<char>::Epsilon.show(), "ε");
    }
}
