use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, play_game, GameEngine, GameStatus, RandomPlayer};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("sim", String::as_str);
    let [_, seed] = args.as_slice() else {
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    };
    let seed: u64 = seed.parse()?;

    let mut engine = GameEngine::from_seed(seed);
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut player = RandomPlayer::new();

    let status = play_game(&mut engine, &mut player, &mut rng);
    if status == GameStatus::InProgress {
        anyhow::bail!("simulated game did not conclude");
    }

    let board = engine.state().board().to_string();
    let rows: Vec<&str> = board.lines().collect();
    let result = json!({
        "seed": seed,
        "status": status,
        "message": status.message(),
        "moves": engine.moves_played(),
        "board": rows,
        "state": engine.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
