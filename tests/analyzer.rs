use montedie::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hand-built outcome source, for tallies that must match a known table.
struct Fixed {
    table: Table<usize, usize, char>,
}

impl Fixed {
    fn new(rows: Vec<Vec<char>>) -> Self {
        let n_cols = rows.first().map_or(0, Vec::len);
        Self {
            table: Table::new(
                (1..=rows.len()).collect(),
                (0..n_cols).collect(),
                rows,
            ),
        }
    }
}

impl OutcomeSource for Fixed {
    type Face = char;

    fn outcome(&self) -> Result<&Table<usize, usize, char>> {
        Ok(&self.table)
    }
}

fn played_game(num_rolls: usize, seed: u64) -> Game<char> {
    let faces = ['A', 'B', 'C', 'D', 'E', 'F'];
    let dice = vec![Die::new(faces).unwrap(), Die::new(faces).unwrap()];
    let mut game = Game::new(dice).unwrap();
    game.play_rng(num_rolls, &mut StdRng::seed_from_u64(seed))
        .unwrap();
    game
}

#[test]
fn jackpot_counts_uniform_rows() {
    let source = Fixed::new(vec![
        vec!['H', 'H'],
        vec!['H', 'T'],
        vec!['T', 'T'],
        vec!['T', 'H'],
    ]);
    assert_eq!(Analyzer::new(&source).jackpot().unwrap(), 2);
}

#[test]
fn single_die_rolls_are_all_jackpots() {
    let mut game = Game::new(vec![d6()]).unwrap();
    game.play_rng(15, &mut StdRng::seed_from_u64(21)).unwrap();
    assert_eq!(Analyzer::new(&game).jackpot().unwrap(), 15);
}

#[test]
fn face_counts_rows_sum_to_dice_count() {
    let game = played_game(10, 22);
    let counts = Analyzer::new(&game).face_counts_per_roll().unwrap();

    assert_eq!(counts.n_rows(), 10);
    for (_, row) in counts.iter_rows() {
        assert_eq!(row.iter().sum::<usize>(), 2);
    }
}

#[test]
fn face_counts_columns_cover_observed_faces() {
    let source = Fixed::new(vec![vec!['B', 'A'], vec!['B', 'B']]);
    let counts = Analyzer::new(&source).face_counts_per_roll().unwrap();

    // first-appearance order over the raveled table
    assert_eq!(counts.col_labels(), &['B', 'A']);
    assert_eq!(counts.get(&1, &'B'), Some(&1));
    assert_eq!(counts.get(&1, &'A'), Some(&1));
    assert_eq!(counts.get(&2, &'B'), Some(&2));
    assert_eq!(counts.get(&2, &'A'), Some(&0));
}

#[test]
fn combo_count_collapses_die_order() {
    let source = Fixed::new(vec![
        vec!['H', 'H'],
        vec!['H', 'T'],
        vec!['T', 'H'],
        vec!['T', 'T'],
    ]);
    let combos = Analyzer::new(&source).combo_count().unwrap();

    assert_eq!(combos.col_labels(), &["Count"]);
    assert_eq!(combos.n_rows(), 3);
    assert_eq!(combos.get(&Faces(vec!['H', 'H']), &"Count"), Some(&1));
    assert_eq!(combos.get(&Faces(vec!['H', 'T']), &"Count"), Some(&2));
    assert_eq!(combos.get(&Faces(vec!['T', 'T']), &"Count"), Some(&1));
}

#[test]
fn permutation_count_preserves_die_order() {
    let source = Fixed::new(vec![
        vec!['H', 'H'],
        vec!['H', 'T'],
        vec!['T', 'H'],
        vec!['T', 'T'],
    ]);
    let perms = Analyzer::new(&source).permutation_count().unwrap();

    assert_eq!(perms.n_rows(), 4);
    for key in [
        Faces(vec!['H', 'H']),
        Faces(vec!['H', 'T']),
        Faces(vec!['T', 'H']),
        Faces(vec!['T', 'T']),
    ] {
        assert_eq!(perms.get(&key, &"Count"), Some(&1));
    }
}

#[test]
fn counts_are_strictly_positive_and_sum_to_rolls() {
    let game = played_game(30, 23);
    let analyzer = Analyzer::new(&game);

    for table in [
        analyzer.combo_count().unwrap(),
        analyzer.permutation_count().unwrap(),
    ] {
        let total: usize = table.cells().iter().map(|row| row[0]).sum();
        assert_eq!(total, 30);
        assert!(table.cells().iter().all(|row| row[0] > 0));
    }
}

#[test]
fn at_least_as_many_permutations_as_combinations() {
    let game = played_game(40, 24);
    let analyzer = Analyzer::new(&game);
    let combos = analyzer.combo_count().unwrap();
    let perms = analyzer.permutation_count().unwrap();
    assert!(perms.n_rows() >= combos.n_rows());
}

#[test]
fn analyses_fail_before_first_play() {
    let game = Game::new(vec![d6()]).unwrap();
    let analyzer = Analyzer::new(&game);
    assert!(matches!(analyzer.jackpot(), Err(Error::NoOutcome)));
    assert!(matches!(
        analyzer.face_counts_per_roll(),
        Err(Error::NoOutcome)
    ));
    assert!(matches!(analyzer.combo_count(), Err(Error::NoOutcome)));
    assert!(matches!(
        analyzer.permutation_count(),
        Err(Error::NoOutcome)
    ));
}

#[test]
fn analyzer_reflects_latest_play() {
    let mut game = Game::new(vec![d6()]).unwrap();
    let mut rng = StdRng::seed_from_u64(25);
    game.play_rng(4, &mut rng).unwrap();
    game.play_rng(9, &mut rng).unwrap();
    assert_eq!(Analyzer::new(&game).jackpot().unwrap(), 9);
}
