use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rummy_rs::cards::parse_cards;
use rummy_rs::hand::Hand;
use rummy_rs::matcher::{enumerate_matches, select_optimal};
use rummy_rs::scoring::Scoring;

const HANDS: [(&str, &str); 3] = [
    ("mixed", "As 2s 3s 4s 4d 4c 2h 3h 4h 2d"),
    ("one_suit", "4h 5h 6h 7h 8h 9h Th Jh Qh Kh"),
    ("no_matches", "Ac 3d 5h 7s 9c Jd Kh 2s 4c 6d"),
];

fn bench_enumerate(c: &mut Criterion) {
    let mut g = c.benchmark_group("enumerate_matches");
    for (name, hand) in HANDS {
        let cards = parse_cards(hand).unwrap();
        g.bench_with_input(BenchmarkId::new(name, hand), &cards, |b, input| {
            b.iter(|| enumerate_matches(black_box(input).iter().copied()))
        });
    }
    g.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut g = c.benchmark_group("select_optimal");
    for (name, hand) in HANDS {
        let candidates = enumerate_matches(parse_cards(hand).unwrap());
        g.bench_with_input(BenchmarkId::new(name, hand), &candidates, |b, input| {
            b.iter(|| select_optimal(black_box(input), Scoring::PointValue))
        });
    }
    g.finish();
}

fn bench_auto_match(c: &mut Criterion) {
    let hand: Hand = HANDS[0].1.parse().unwrap();
    c.bench_function("auto_match", |b| {
        b.iter(|| {
            let mut h = hand.clone();
            h.auto_match();
            black_box(h.score())
        })
    });
}

criterion_group!(benches, bench_enumerate, bench_select, bench_auto_match);
criterion_main!(benches);
