pub mod board;
pub mod game;
pub mod game2048;
pub mod game_of_fifteen;
pub mod merge;
pub mod parity;

pub use board::{BoardError, Cell, Direction, GameBoard, SquareBoard};
pub use game::Game;
pub use game2048::{Game2048, Game2048Initializer, RandomGame2048Initializer};
pub use game_of_fifteen::{GameOfFifteen, GameOfFifteenInitializer, RandomGameInitializer};
pub use merge::move_and_merge_equal;
pub use parity::{is_even, is_even_by_cycles};
