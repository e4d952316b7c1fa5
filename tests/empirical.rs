use montedie::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn frequencies_sum_to_one() {
    let mut est = Empirical::builder()
        .sample_size(2_000)
        .build(StdRng::seed_from_u64(31));
    let freq = est.frequencies(&d6()).unwrap();

    assert_eq!(freq.n_rows(), 6);
    assert_eq!(freq.col_labels(), &["Frequency"]);
    let total: f64 = freq.cells().iter().map(|row| row[0]).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn zero_weight_face_has_zero_frequency() {
    let mut die = Die::new(['A', 'B']).unwrap();
    die.change_weight(&'B', 0).unwrap();

    let mut est = Empirical::builder()
        .sample_size(500)
        .build(StdRng::seed_from_u64(32));
    let freq = est.frequencies(&die).unwrap();

    assert_eq!(freq.get(&'A', &"Frequency"), Some(&1.0));
    assert_eq!(freq.get(&'B', &"Frequency"), Some(&0.0));
}

#[test]
fn heavier_face_dominates() {
    let mut die = Die::new(['A', 'B']).unwrap();
    die.change_weight(&'A', 9.0).unwrap();

    let mut est = Empirical::builder()
        .sample_size(10_000)
        .build(StdRng::seed_from_u64(33));
    let freq = est.frequencies(&die).unwrap();

    let a = *freq.get(&'A', &"Frequency").unwrap();
    // expected 0.9; a seeded run stays well clear of 0.5
    assert!(a > 0.8, "observed frequency {a}");
}

#[test]
fn unrollable_die_propagates_error() {
    let mut die = Die::new(['A']).unwrap();
    die.change_weight(&'A', 0.0).unwrap();
    let mut est = Empirical::builder()
        .sample_size(10)
        .build(StdRng::seed_from_u64(34));
    assert_eq!(est.frequencies(&die), Err(Error::ZeroWeightSum));
}

#[test]
fn default_sample_size_is_set() {
    assert!(Empirical::default().sample_size() > 0);
}
