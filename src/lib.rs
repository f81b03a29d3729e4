pub mod core;

// module re-exports
pub use crate::core::algorithms::{MinimaxConfig, MinimaxSearch, SearchCounter, SearchNode, MAX_PLY_LIMIT};
pub use crate::core::definitions::{Cell, Evaluator, GameState, Location, MoveApplier, Side, RINGS, SECTORS};
pub use crate::core::engine::{Board, PolarRules};
pub use crate::core::error::{Error, Result};
pub use crate::core::game::{run_match, Game};
pub use crate::core::players::{HumanPlayer, MinimaxPlayer, Player, RandomPlayer};
