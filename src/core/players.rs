use std::io::{self, BufRead, Stdout, Write};
use std::sync::mpsc::Receiver;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::algorithms::{MinimaxConfig, MinimaxSearch};
use crate::core::definitions::{Evaluator, Location, MoveApplier, Side};
use crate::core::engine::{Board, PolarRules};
use crate::core::error::{Error, Result};
use crate::core::utils::parse_location;

/// Anything that can pick a move for one side of a game.
pub trait Player {
    /// Called once before the first move of a game.
    fn prepare_for_game(&mut self, side: Side) -> Result<()> {
        let _ = side;
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, legal_targets: &[Location]) -> Result<Location>;

    fn display_name(&self) -> String;
}

/// Where a [`HumanPlayer`] reads its lines from.
pub trait LineSource {
    /** Same contract as [`BufRead::read_line`]: `Ok(0)` means end of input. */
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<B: BufRead> LineSource for B {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

/// Standard input, locked only while a line is read so several players can share it.
pub struct StdinSource;

impl LineSource for StdinSource {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Reads moves typed as `ring sector`, asking again until one of the legal targets is named.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanPlayer { input, output }
    }
}

impl HumanPlayer<StdinSource, Stdout> {
    pub fn stdio() -> Self {
        HumanPlayer::new(StdinSource, io::stdout())
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, _board: &Board, legal_targets: &[Location]) -> Result<Location> {
        loop {
            write!(self.output, "Your move (ring sector): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.next_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            match parse_location(&line) {
                Some(location) if legal_targets.contains(&location) => return Ok(location),
                Some(location) => {
                    warn!("Rejected unavailable move {location}");
                    writeln!(self.output, "{location} is not available")?;
                }
                None => {
                    warn!("Unreadable move {:?}", line.trim());
                    writeln!(self.output, "Expected a ring (0-3) and a sector (0-11)")?;
                }
            }
        }
    }

    fn display_name(&self) -> String {
        "Human Player".to_string()
    }
}

/// Picks moves with a depth-limited minimax search.
///
/// Built [`with_setup`](MinimaxPlayer::with_setup), the player blocks in
/// [`Player::prepare_for_game`] until a configuration is sent over the channel,
/// once for every game it is prepared for.
pub struct MinimaxPlayer<A = PolarRules, E = PolarRules> {
    search: MinimaxSearch<A, E>,
    is_maximizer: bool,
    setup: Option<Receiver<MinimaxConfig>>,
}

impl MinimaxPlayer {
    pub fn new(config: MinimaxConfig) -> Self {
        MinimaxPlayer::with_rules(config, PolarRules, PolarRules)
    }
}

impl<A: MoveApplier, E: Evaluator> MinimaxPlayer<A, E> {
    pub fn with_rules(config: MinimaxConfig, applier: A, evaluator: E) -> Self {
        MinimaxPlayer {
            search: MinimaxSearch::new(config, applier, evaluator),
            is_maximizer: true,
            setup: None,
        }
    }

    pub fn with_setup(mut self, setup: Receiver<MinimaxConfig>) -> Self {
        self.setup = Some(setup);
        self
    }

    pub fn config(&self) -> MinimaxConfig {
        self.search.config()
    }

    pub fn is_maximizer(&self) -> bool {
        self.is_maximizer
    }
}

impl<A: MoveApplier, E: Evaluator> Player for MinimaxPlayer<A, E> {
    fn prepare_for_game(&mut self, side: Side) -> Result<()> {
        self.is_maximizer = side.is_maximizer();
        if let Some(setup) = &self.setup {
            let config = setup.recv().map_err(|_| Error::SetupAborted)?;
            self.search.set_config(config)?;
            info!("{} configured for side {side}", self.display_name());
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, legal_targets: &[Location]) -> Result<Location> {
        if legal_targets.is_empty() {
            return Err(Error::NoLegalTargets);
        }
        let (best, _) = self.search.search(board, self.is_maximizer)?;
        best.and_then(|node| node.play).ok_or(Error::NoMoveFound)
    }

    fn display_name(&self) -> String {
        format!("Minimax {}p", self.search.config().plies)
    }
}

/// Plays a uniformly random legal target.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomPlayer { rng }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, _board: &Board, legal_targets: &[Location]) -> Result<Location> {
        legal_targets
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalTargets)
    }

    fn display_name(&self) -> String {
        "Random Player".to_string()
    }
}
