use montedie::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);

    // a fair d6 next to a loaded one
    let fair = d6();
    let mut loaded = d6();
    loaded.change_weight(&6, 5.0)?;

    println!("loaded die:\n{}", loaded.show());

    let mut est = Empirical::builder().sample_size(50_000).build(&mut rng);
    println!("observed frequencies:\n{}", est.frequencies(&loaded)?);

    let mut game = Game::new(vec![fair, loaded])?;
    game.play_rng(1_000, &mut rng)?;

    let analyzer = Analyzer::new(&game);
    println!("jackpots over 1000 rolls: {}", analyzer.jackpot()?);
    println!("combinations:\n{}", analyzer.combo_count()?);
    println!("permutations:\n{}", analyzer.permutation_count()?);

    Ok(())
}
