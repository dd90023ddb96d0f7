use rand::seq::SliceRandom;
use rand::rng;

use crate::board::{Direction, GameBoard};
use crate::game::Game;
use crate::parity::is_even;

/// The classic 15-puzzle is played on a 4x4 board.
const BOARD_WIDTH: usize = 4;

const TILE_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH - 1;

/// Supplies the starting arrangement: an even permutation of 1..=15, written
/// row-major with the last cell left empty. Only even permutations are
/// solvable, so implementations must guarantee the parity.
pub trait GameOfFifteenInitializer {
    fn initial_permutation(&self) -> &[u32];
}

/// Shuffles 1..=15 and repairs an odd result by swapping the first two
/// entries, which flips the parity exactly once.
#[derive(Clone, Debug)]
pub struct RandomGameInitializer {
    permutation: Vec<u32>,
}

impl RandomGameInitializer {
    pub fn new() -> Self {
        let mut rng = rng();
        let mut permutation: Vec<u32> = (1..=TILE_COUNT as u32).collect();
        permutation.shuffle(&mut rng);
        if !is_even(&permutation) {
            permutation.swap(0, 1);
        }
        RandomGameInitializer { permutation }
    }
}

impl Default for RandomGameInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOfFifteenInitializer for RandomGameInitializer {
    fn initial_permutation(&self) -> &[u32] {
        &self.permutation
    }
}

pub struct GameOfFifteen<I> {
    board: GameBoard<u32>,
    initializer: I,
}

impl<I: GameOfFifteenInitializer> GameOfFifteen<I> {
    pub fn new(initializer: I) -> Self {
        GameOfFifteen {
            board: GameBoard::new(BOARD_WIDTH),
            initializer,
        }
    }
}

impl<I: GameOfFifteenInitializer> Game for GameOfFifteen<I> {
    fn initialize(&mut self) {
        let permutation = self.initializer.initial_permutation().to_vec();
        let mut values = permutation.into_iter();
        for cell in self.board.all_cells() {
            self.board.set(cell, values.next());
        }
    }

    /// The empty cell always has at least one neighbor, so some move is
    /// always legal.
    fn can_move(&self) -> bool {
        true
    }

    fn has_won(&self) -> bool {
        let mut expected = 1..=TILE_COUNT as u32;
        self.board
            .all_cells()
            .into_iter()
            .all(|cell| self.board.get(cell).copied() == expected.next())
    }

    /// Slide the tile next to the empty cell into it. Moving `Left` pulls
    /// the tile on the empty cell's right, so the sliding tile sits one step
    /// in the opposite of the requested direction. If the empty cell is
    /// against that edge the move is a no-op.
    fn process_move(&mut self, direction: Direction) {
        let Some(empty) = self.board.find(|v| v.is_none()) else {
            return;
        };
        let Some(tile) = self.board.neighbor(empty, direction.opposite()) else {
            return;
        };
        let value = self.board.get(tile).copied();
        self.board.set(tile, None);
        self.board.set(empty, value);
    }

    fn get(&self, i: usize, j: usize) -> Option<u32> {
        let cell = self.board.cell_at_or_none(i, j)?;
        self.board.get(cell).copied()
    }
}
