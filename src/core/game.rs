use log::info;

use crate::core::definitions::{Cell, GameState, Location, MoveApplier, Side};
use crate::core::engine::{Board, PolarRules};
use crate::core::error::{Error, Result};
use crate::core::players::Player;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_side: Side,
    rules: PolarRules,
}

impl Game {
    pub fn new() -> Game {
        Game::with_board(Board::new(), Side::A)
    }

    pub fn with_board(board: Board, to_move: Side) -> Game {
        Game {
            board,
            current_side: to_move,
            rules: PolarRules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn state(&self) -> GameState {
        self.rules.state(&self.board, self.current_side)
    }

    pub fn legal_targets(&self) -> Vec<Location> {
        self.rules.legal_targets(&self.board)
    }

    /** Place the current side's mark at `location` and pass the turn. */
    pub fn play(&mut self, location: Location) -> Result<GameState> {
        if self.state().finished() {
            return Err(Error::GameOver);
        }
        let board = self.rules.apply(&self.board, location, self.current_side)?;
        if board.get(location) == Cell::Illegal {
            return Err(Error::IllegalMove(location));
        }
        info!("{} plays {location}", self.current_side);
        self.board = board;
        self.current_side = self.current_side.opposite();
        Ok(self.state())
    }

    /** Ask `player` for a move for the current side and play it. */
    pub fn play_turn(&mut self, player: &mut dyn Player) -> Result<GameState> {
        if self.state().finished() {
            return Err(Error::GameOver);
        }
        let targets = self.legal_targets();
        let location = player.choose_move(&self.board, &targets)?;
        self.play(location)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Plays `game` to the end, `first` moving for side A and `second` for side B.
///
/// `observer` sees the game before every turn.
pub fn run_match(
    game: &mut Game,
    first: &mut dyn Player,
    second: &mut dyn Player,
    mut observer: impl FnMut(&Game),
) -> Result<GameState> {
    first.prepare_for_game(Side::A)?;
    second.prepare_for_game(Side::B)?;
    info!("{} (A) vs {} (B)", first.display_name(), second.display_name());
    let mut state = game.state();
    while let GameState::InProgress(side) = state {
        observer(game);
        let player: &mut dyn Player = match side {
            Side::A => &mut *first,
            Side::B => &mut *second,
        };
        state = game.play_turn(player)?;
    }
    info!("Game finished: {state:?}");
    Ok(state)
}
