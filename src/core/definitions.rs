use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::engine::Board;
use crate::core::error::{Error, Result};

pub const RINGS: usize = 4;
pub const SECTORS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /** Side A is always searched as the maximizer. */
    pub fn is_maximizer(self) -> bool {
        self == Side::A
    }

    pub fn from_maximizer(is_maximizer: bool) -> Side {
        if is_maximizer {
            Side::A
        } else {
            Side::B
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "X"),
            Side::B => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Side),
    /** Written by a move applier at the target of a rejected move, never stored in a live board */
    Illegal,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Taken(side) => Some(side),
            _ => None,
        }
    }
}

/// One cell of the polar grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    ring: u8,
    sector: u8,
}

impl Location {
    pub fn new(ring: usize, sector: usize) -> Result<Location> {
        if ring < RINGS && sector < SECTORS {
            Ok(Location {
                ring: ring as u8,
                sector: sector as u8,
            })
        } else {
            Err(Error::InvalidLocation { ring, sector })
        }
    }

    pub fn ring(&self) -> usize {
        self.ring as usize
    }

    pub fn sector(&self) -> usize {
        self.sector as usize
    }

    /** Every cell of the grid, ring-major then sector-minor. */
    pub fn all() -> impl Iterator<Item = Location> {
        (0..RINGS as u8).flat_map(|ring| (0..SECTORS as u8).map(move |sector| Location { ring, sector }))
    }

    /** Neighbouring cells, wrapping around the sectors but not the rings. */
    pub fn neighbours(&self) -> impl Iterator<Item = Location> {
        let (ring, sector) = (self.ring as isize, self.sector as isize);
        (-1..=1isize)
            .flat_map(move |dr| (-1..=1isize).map(move |ds| (dr, ds)))
            .filter(|&(dr, ds)| dr != 0 || ds != 0)
            .filter_map(move |(dr, ds)| {
                let r = ring + dr;
                if r < 0 || r >= RINGS as isize {
                    return None;
                }
                let s = (sector + ds).rem_euclid(SECTORS as isize);
                Some(Location {
                    ring: r as u8,
                    sector: s as u8,
                })
            })
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}s{}", self.ring, self.sector)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress(Side),
    Won(Side),
    Draw,
}

impl GameState {
    pub fn finished(&self) -> bool {
        !matches!(self, GameState::InProgress(_))
    }
}

/// Produces the board that would result from `side` playing at `target`.
///
/// An illegal move is reported through the data, not the error channel: the
/// returned board holds [`Cell::Illegal`] at `target` and the rest of it must be
/// ignored. `Err` is reserved for the applier itself malfunctioning.
pub trait MoveApplier {
    fn apply(&self, board: &Board, target: Location, side: Side) -> Result<Board>;
}

/// Scores a board; larger is better for [`Side::A`].
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Result<i32>;
}

impl<F> MoveApplier for F
where
    F: Fn(&Board, Location, Side) -> Result<Board>,
{
    fn apply(&self, board: &Board, target: Location, side: Side) -> Result<Board> {
        self(board, target, side)
    }
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> Result<i32>,
{
    fn evaluate(&self, board: &Board) -> Result<i32> {
        self(board)
    }
}
