use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Evaluator, Location, MoveApplier, Side};
use crate::core::engine::Board;
use crate::core::error::{Error, Result};

/// Deepest ply limit accepted. Work grows as 48^(plies + 1) since nothing is pruned.
pub const MAX_PLY_LIMIT: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Plies searched past the root before the heuristic is applied.
    pub plies: u8,
}

impl MinimaxConfig {
    pub fn new(plies: u8) -> Result<Self> {
        let config = MinimaxConfig { plies };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.plies > MAX_PLY_LIMIT {
            Err(Error::InvalidPlyLimit {
                plies: self.plies,
                max: MAX_PLY_LIMIT,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig { plies: 1 }
    }
}

/// A position in the game tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub board: Board,
    pub is_maximizer: bool,
    /** Move that led here from the parent, `None` for the root */
    pub play: Option<Location>,
    fitness: Option<i32>,
}

impl SearchNode {
    pub fn root(board: Board, is_maximizer: bool) -> Self {
        SearchNode {
            board,
            is_maximizer,
            play: None,
            fitness: None,
        }
    }

    fn child(board: Board, is_maximizer: bool, play: Location) -> Self {
        SearchNode {
            board,
            is_maximizer,
            play: Some(play),
            fitness: None,
        }
    }

    /** Set once the node is scored by the heuristic or backed up from a child. */
    pub fn fitness(&self) -> Option<i32> {
        self.fitness
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchCounter {
    /// Nodes entered, the root included.
    pub nodes: u64,
    /// Boards scored by the evaluator.
    pub evals: u64,
    /// Candidates the applier rejected.
    pub skipped: u64,
}

impl SearchCounter {
    pub fn summary(&self, dt_us: u128) -> String {
        format!(
            "nodes={} evals={} skipped={} dt={}us",
            self.nodes, self.evals, self.skipped, dt_us
        )
    }
}

/// Depth-limited minimax without pruning.
pub struct MinimaxSearch<A, E> {
    config: MinimaxConfig,
    applier: A,
    evaluator: E,
}

impl<A: MoveApplier, E: Evaluator> MinimaxSearch<A, E> {
    pub fn new(config: MinimaxConfig, applier: A, evaluator: E) -> Self {
        MinimaxSearch {
            config,
            applier,
            evaluator,
        }
    }

    pub fn config(&self) -> MinimaxConfig {
        self.config
    }

    pub fn set_config(&mut self, config: MinimaxConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Children of `node`: every cell of the grid, ring-major, that the applier
    /// accepts for the side moving from `node`.
    pub fn candidates<'a>(&'a self, node: &'a SearchNode) -> impl Iterator<Item = Result<SearchNode>> + 'a {
        Location::all().filter_map(move |target| self.expand(node, target).transpose())
    }

    /** Child of `node` playing `target`, `None` when the applier rejects it. */
    fn expand(&self, node: &SearchNode, target: Location) -> Result<Option<SearchNode>> {
        let side = Side::from_maximizer(node.is_maximizer);
        let board = self.applier.apply(&node.board, target, side)?;
        if board.get(target) == Cell::Illegal {
            return Ok(None);
        }
        Ok(Some(SearchNode::child(board, !node.is_maximizer, target)))
    }

    /// Best child of `node`, carrying the fitness backed up from below.
    ///
    /// Past the ply limit the node is scored and returned as is. `None` means
    /// no child had a playable continuation. Among equally scored children the
    /// first one enumerated wins.
    pub fn best_node(&self, mut node: SearchNode, ply: u8, counter: &mut SearchCounter) -> Result<Option<SearchNode>> {
        counter.nodes += 1;
        trace!(
            "Testing ply {ply} with move {}",
            node.play.map_or_else(|| "none".to_string(), |play| play.to_string())
        );

        if ply > self.config.plies {
            node.fitness = Some(self.evaluator.evaluate(&node.board)?);
            counter.evals += 1;
            return Ok(Some(node));
        }

        let mut best_node: Option<SearchNode> = None;
        let mut best_fitness = if node.is_maximizer { i32::MIN } else { i32::MAX };
        for target in Location::all() {
            let Some(mut child) = self.expand(&node, target)? else {
                counter.skipped += 1;
                continue;
            };
            let Some(fitness) = self
                .best_node(child.clone(), ply + 1, counter)?
                .and_then(|best_child| best_child.fitness)
            else {
                continue;
            };
            let improves = if node.is_maximizer {
                fitness > best_fitness
            } else {
                fitness < best_fitness
            };
            if best_node.is_none() || improves {
                child.fitness = Some(fitness);
                best_fitness = fitness;
                best_node = Some(child);
            }
        }
        Ok(best_node)
    }

    /// Runs a full search from `board`, with the side to move given by `is_maximizer`.
    pub fn search(&self, board: &Board, is_maximizer: bool) -> Result<(Option<SearchNode>, SearchCounter)> {
        let now = Instant::now();
        let mut counter = SearchCounter::default();
        let best = self.best_node(SearchNode::root(board.clone(), is_maximizer), 0, &mut counter)?;
        debug!(
            "Search at {} plies: {} -> {:?}",
            self.config.plies,
            counter.summary(now.elapsed().as_micros()),
            best.as_ref().and_then(|node| node.play)
        );
        Ok((best, counter))
    }
}
