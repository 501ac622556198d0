use std::collections::{BTreeMap, BTreeSet};

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
/// These are used for bookkeeping inside of algorithms, where iteration order does not matter.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Type alias for ordered sets. Everything that is stored in an automaton uses ordered collections,
/// which makes iteration (and thus rendering and enumeration) deterministic.
pub type OrderedSet<S> = BTreeSet<S>;
/// Type alias for ordered maps.
pub type OrderedMap<K, V> = BTreeMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;
