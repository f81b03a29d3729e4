use std::fmt::Display;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Evaluator, GameState, Location, MoveApplier, Side, RINGS, SECTORS};
use crate::core::error::{Error, Result};
use crate::core::utils::{LINES, LINE_LENGTH};

/** Polar grid: one row per ring, one column per sector */
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SECTORS]; RINGS],
}

impl Board {
    pub fn new() -> Board {
        Default::default()
    }

    pub fn get(&self, location: Location) -> Cell {
        self.cells[location.ring()][location.sector()]
    }

    /** Copy of this board with one cell replaced. */
    pub fn with(&self, location: Location, cell: Cell) -> Board {
        let mut board = self.clone();
        board.cells[location.ring()][location.sector()] = cell;
        board
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, cell)| cell == Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, cell)| cell != Cell::Empty)
    }

    pub fn count(&self, side: Side) -> usize {
        self.iter().filter(|(_, cell)| *cell == Cell::Taken(side)).count()
    }

    /** Cells in ring-major, sector-minor order. */
    pub fn iter(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        Location::all().map(|location| (location, self.get(location)))
    }

    fn find_illegal(&self) -> Option<Location> {
        self.iter()
            .find(|(_, cell)| *cell == Cell::Illegal)
            .map(|(location, _)| location)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for sector in 0..SECTORS {
            write!(f, "{sector:>3}")?;
        }
        writeln!(f)?;
        for (ring, row) in self.cells.iter().enumerate() {
            write!(f, "r{ring}  ")?;
            for cell in row {
                let mark = match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Taken(side) => side.to_string(),
                    Cell::Illegal => "!".to_string(),
                };
                write!(f, "{mark:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Weight of a line holding `n` marks of a single side.
const LINE_WEIGHTS: [i32; LINE_LENGTH + 1] = [0, 1, 8, 64, 10_000];

/// Reference rules of polar tic-tac-toe.
///
/// A mark goes on an empty cell touching an occupied one (any cell while the
/// board is empty). Four in a row along a ring, a sector or a spiral wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct PolarRules;

impl PolarRules {
    pub fn is_legal(&self, board: &Board, target: Location) -> bool {
        board.get(target) == Cell::Empty
            && (board.is_empty()
                || target
                    .neighbours()
                    .any(|neighbour| board.get(neighbour).side().is_some()))
    }

    pub fn legal_targets(&self, board: &Board) -> Vec<Location> {
        Location::all()
            .filter(|&location| self.is_legal(board, location))
            .collect()
    }

    pub fn winner(&self, board: &Board) -> Option<Side> {
        LINES.iter().find_map(|line| {
            let first = board.cells[line[0].0][line[0].1].side()?;
            line.iter()
                .all(|&(ring, sector)| board.cells[ring][sector] == Cell::Taken(first))
                .then_some(first)
        })
    }

    /** No winner, and no cell left to play. */
    pub fn is_draw(&self, board: &Board) -> bool {
        self.winner(board).is_none() && (board.is_full() || self.legal_targets(board).is_empty())
    }

    pub fn state(&self, board: &Board, to_move: Side) -> GameState {
        if let Some(winner) = self.winner(board) {
            GameState::Won(winner)
        } else if self.is_draw(board) {
            GameState::Draw
        } else {
            GameState::InProgress(to_move)
        }
    }

    /** Open-line count score, positive when side A is ahead. */
    pub fn fitness(&self, board: &Board) -> i32 {
        LINES
            .iter()
            .map(|line| {
                let (mut a, mut b) = (0, 0);
                for &(ring, sector) in line {
                    match board.cells[ring][sector] {
                        Cell::Taken(Side::A) => a += 1,
                        Cell::Taken(Side::B) => b += 1,
                        _ => (),
                    }
                }
                match (a, b) {
                    (a, 0) => LINE_WEIGHTS[a],
                    (0, b) => -LINE_WEIGHTS[b],
                    _ => 0,
                }
            })
            .sum()
    }
}

impl MoveApplier for PolarRules {
    fn apply(&self, board: &Board, target: Location, side: Side) -> Result<Board> {
        if let Some(location) = board.find_illegal() {
            return Err(Error::CorruptBoard(location));
        }
        if self.is_legal(board, target) {
            Ok(board.with(target, Cell::Taken(side)))
        } else {
            trace!("{side} can't play at {target}");
            Ok(board.with(target, Cell::Illegal))
        }
    }
}

impl Evaluator for PolarRules {
    fn evaluate(&self, board: &Board) -> Result<i32> {
        match board.find_illegal() {
            Some(location) => Err(Error::CorruptBoard(location)),
            None => Ok(self.fitness(board)),
        }
    }
}
