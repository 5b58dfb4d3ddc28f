use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use std::time::Duration;
use swipe_deck::animation::SpringAnimation;
use swipe_deck::card::{classify, decide};
use swipe_deck::options::{DeckOptions, SpringConfig};
use swipe_deck::util::{interpolate_clamped, Easing};
use swipe_deck::{Deck, DeckEvent, HostScheduler};

struct Discard;

impl HostScheduler for Discard {
    fn dispatch(&mut self, _event: DeckEvent) {}
}

fn easing_benchmark(c: &mut Criterion) {
    let f = Easing::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn spring_step_benchmark(c: &mut Criterion) {
    let spring = SpringAnimation::new(0.0, 585.0, SpringConfig::default());
    let dt = Duration::from_millis(16);
    c.bench_function("spring_step", |b| {
        b.iter(|| black_box(spring.step(black_box(120.0), black_box(900.0), dt)))
    });
}

fn interpolate_benchmark(c: &mut Criterion) {
    let input = [-130.0, 0.0, 130.0];
    let output = [-0.157, 0.0, 0.157];
    c.bench_function("interpolate_clamped", |b| {
        b.iter(|| black_box(interpolate_clamped(black_box(77.0), &input, &output)))
    });
}

fn release_decision_benchmark(c: &mut Criterion) {
    let config = DeckOptions::default().resolve(10).unwrap();
    let translation = Vec2::new(80.0, 20.0);
    let velocity = Vec2::new(350.0, -40.0);
    c.bench_function("classify_and_decide", |b| {
        b.iter(|| {
            let classification = classify(black_box(translation), 3, &config);
            black_box(decide(translation, velocity, classification, 3, &config))
        })
    });
}

fn deck_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_tick");

    for count in [3, 10, 50] {
        let items: Vec<usize> = (0..count).collect();
        let mut deck = Deck::builder(items, |item: &usize, _| *item)
            .scheduler(Discard)
            .build()
            .unwrap();
        let dt = Duration::from_millis(16);
        group.bench_function(format!("{count}_cards"), |b| {
            b.iter(|| {
                let _ = deck.swipe_right() || deck.swipe_back();
                for _ in 0..10 {
                    let _ = black_box(deck.tick(dt));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    spring_step_benchmark,
    interpolate_benchmark,
    release_decision_benchmark,
    deck_tick_benchmark
);
criterion_main!(benches);
