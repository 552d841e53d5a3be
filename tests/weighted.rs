//! Distribution and determinism of the weighted sampler.

use fakepass::rng;
use fakepass::weighted::{Weighted, WeightedError, weighted};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Label {
    Text(&'static str),
    Int(i64),
    Float(f64),
}

const OPTIONS: [Label; 3] = [Label::Text("hello"), Label::Int(2), Label::Float(6.9)];
const WEIGHTS: [f64; 3] = [1.0, 2.0, 3.0];

fn percent(found: &[Label], label: Label) -> f64 {
    found.iter().filter(|&&l| l == label).count() as f64 / found.len() as f64 * 100.0
}

#[test]
fn frequencies_follow_weights() {
    let mut rng = rng::seeded(11);
    let found: Vec<Label> = (0..100_000)
        .map(|_| *weighted(&mut rng, &OPTIONS, &WEIGHTS).unwrap())
        .collect();

    let hello = percent(&found, Label::Text("hello"));
    assert!((14.0..=18.0).contains(&hello), "hello: {}", hello);
    let two = percent(&found, Label::Int(2));
    assert!((30.0..=35.0).contains(&two), "2: {}", two);
    let float = percent(&found, Label::Float(6.9));
    assert!((48.0..=52.0).contains(&float), "6.9: {}", float);
}

#[test]
fn reusable_table_matches_one_shot_calls() {
    let table = Weighted::new(&OPTIONS, &WEIGHTS).unwrap();
    let mut a = rng::seeded(11);
    let mut b = rng::seeded(11);
    for _ in 0..500 {
        assert_eq!(
            table.sample(&mut a),
            weighted(&mut b, &OPTIONS, &WEIGHTS).unwrap()
        );
    }
}

#[test]
fn seeded_sequences_repeat() {
    let run = |seed| -> Vec<Label> {
        let mut rng = rng::seeded(seed);
        (0..100)
            .map(|_| *weighted(&mut rng, &OPTIONS, &WEIGHTS).unwrap())
            .collect()
    };
    assert_eq!(run(11), run(11));
    assert_ne!(run(11), run(12));
}

#[test]
fn seed_eleven_draws_are_pinned() {
    let mut rng = rng::seeded(11);
    let found: Vec<Label> = (0..8)
        .map(|_| *weighted(&mut rng, &OPTIONS, &WEIGHTS).unwrap())
        .collect();
    assert_eq!(
        found,
        [
            Label::Int(2),
            Label::Float(6.9),
            Label::Float(6.9),
            Label::Int(2),
            Label::Int(2),
            Label::Float(6.9),
            Label::Float(6.9),
            Label::Float(6.9),
        ]
    );
}

#[test]
fn invalid_sets_are_rejected() {
    let mut rng = rng::seeded(1);
    assert_eq!(
        weighted(&mut rng, &OPTIONS, &[1.0, 2.0]),
        Err(WeightedError::LengthMismatch {
            options: 3,
            weights: 2
        })
    );
    assert_eq!(
        weighted::<Label, _>(&mut rng, &[], &[]),
        Err(WeightedError::Empty)
    );
    assert_eq!(
        weighted(&mut rng, &OPTIONS, &[0.0, 0.0, 0.0]),
        Err(WeightedError::ZeroTotal)
    );
}

#[test]
fn zero_weight_option_is_never_drawn() {
    let mut rng = rng::seeded(2);
    for _ in 0..10_000 {
        let picked = weighted(&mut rng, &OPTIONS, &[1.0, 0.0, 1.0]).unwrap();
        assert_ne!(*picked, Label::Int(2));
    }
}
