#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, play_game, print_board, CliPlayer, GameEngine, GameStatus, RandomPlayer,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the random opponent in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let a random player face the opponent and report the tallies.
    Auto {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut engine = GameEngine::new(make_rng(seed));
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut player = CliPlayer::new();
            println!("You are X. Enter squares as column letter and row number, e.g. B2.");
            loop {
                print_board(engine.state().board());
                let status = play_game(&mut engine, &mut player, &mut rng);
                if status == GameStatus::InProgress {
                    // input closed mid-game
                    break;
                }
                if !player.prompt_play_again() {
                    break;
                }
                engine.restart();
            }
        }
        Commands::Auto { games, seed } => {
            let mut engine = GameEngine::new(make_rng(seed));
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut player = RandomPlayer::new();
            let (mut won, mut lost, mut drawn) = (0usize, 0usize, 0usize);
            for _ in 0..games {
                match play_game(&mut engine, &mut player, &mut rng) {
                    GameStatus::Won => won += 1,
                    GameStatus::Lost => lost += 1,
                    GameStatus::Draw => drawn += 1,
                    GameStatus::InProgress => {
                        return Err(anyhow::anyhow!("game ended without a result"))
                    }
                }
                engine.restart();
            }
            println!("games: {}  won: {}  lost: {}  drawn: {}", games, won, lost, drawn);
        }
    }
    Ok(())
}
