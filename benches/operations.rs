use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use regular_automata::prelude::*;

const SEEDS: [u64; 4] = [3, 2, 7, 11];

fn random_automata(config: RandomConfig) -> Vec<Automaton> {
    SEEDS
        .iter()
        .map(|seed| random_automaton(&mut Rng::with_seed(*seed), &config))
        .collect()
}

fn determinize_all(automata: &[Automaton]) {
    for aut in automata {
        aut.determinize();
    }
}

fn intersect_pairwise(automata: &[Automaton]) {
    for (left, right) in automata.iter().zip(automata.iter().skip(1)) {
        let _ = left.intersection(right);
    }
}

fn enumerate_words(automata: &[Automaton]) {
    for aut in automata {
        aut.words_up_to(8);
    }
}

fn benchings(c: &mut Criterion) {
    let nondeterministic = random_automata(RandomConfig::new(12, 3).with_epsilon_density(0.05));
    let epsilon_free = random_automata(RandomConfig::new(12, 3).with_epsilon_density(0.0));

    c.bench_function("subset_construction", |b| {
        b.iter(|| determinize_all(black_box(&nondeterministic)))
    });
    c.bench_function("product_construction", |b| {
        b.iter(|| intersect_pairwise(black_box(&epsilon_free)))
    });
    c.bench_function("words_up_to", |b| {
        b.iter(|| enumerate_words(black_box(&nondeterministic)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchings
}
criterion_main!(benches);
