use anyhow::Context;
use clap::{Parser, ValueEnum};
use polar_ttt::{run_match, Game, GameState, HumanPlayer, MinimaxConfig, MinimaxPlayer, Player, RandomPlayer, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Minimax,
    Random,
}

/// Polar tic-tac-toe on a 4 ring by 12 sector board
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Who plays X, moving first
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    first: PlayerKind,

    /// Who plays O
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    second: PlayerKind,

    /// Ply limit of minimax players
    #[arg(long, default_value_t = MinimaxConfig::default().plies)]
    plies: u8,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,
}

fn make_player(kind: PlayerKind, config: MinimaxConfig, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio()),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(config)),
        PlayerKind::Random => Box::new(RandomPlayer::new(seed)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args = Args::parse();
    let config = MinimaxConfig::new(args.plies).context("bad --plies")?;

    let mut first = make_player(args.first, config, args.seed);
    let mut second = make_player(args.second, config, args.seed.map(|seed| seed.wrapping_add(1)));
    let names = [first.display_name(), second.display_name()];

    let mut game = Game::new();
    let state = run_match(&mut game, first.as_mut(), second.as_mut(), |game| {
        println!("\n{}", game.board());
        println!("{} to move", game.current_side());
    })
    .context("game aborted")?;

    println!("\n{}", game.board());
    match state {
        GameState::Won(side) => {
            let name = match side {
                Side::A => &names[0],
                Side::B => &names[1],
            };
            println!("{side} wins ({name})");
        }
        _ => println!("Draw"),
    }
    Ok(())
}
