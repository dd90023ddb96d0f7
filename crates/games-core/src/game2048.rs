use rand::seq::SliceRandom;
use rand::rng;
use rand::RngExt;

use crate::board::{Cell, Direction, GameBoard};
use crate::game::Game;
use crate::merge::move_and_merge_equal;

/// 2048 is played on a 4x4 board.
const BOARD_WIDTH: usize = 4;

/// Reaching a tile of this value wins the standard game.
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// Produces the cell/value pairs spawned onto the board: the two starting
/// tiles and one tile after every move that slides something.
pub trait Game2048Initializer {
    /// The next tile to place, or `None` if the board has no empty cell.
    /// The returned cell must currently be empty.
    fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)>;
}

/// Standard spawning rule: a uniformly random empty cell, holding 2 nine
/// times out of ten and 4 otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomGame2048Initializer;

impl Game2048Initializer for RandomGame2048Initializer {
    fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)> {
        let mut rng = rng();
        let mut empty = board.filter(|v| v.is_none());
        empty.shuffle(&mut rng);
        let cell = empty.first().copied()?;
        let value = if rng.random_range(0..10) == 9 { 4 } else { 2 };
        Some((cell, value))
    }
}

pub struct Game2048<I> {
    board: GameBoard<u32>,
    initializer: I,
    win_value: u32,
}

impl<I: Game2048Initializer> Game2048<I> {
    pub fn new(initializer: I) -> Self {
        Self::with_win_value(initializer, DEFAULT_WIN_VALUE)
    }

    /// Same game with a custom win threshold; any tile >= `win_value` wins.
    pub fn with_win_value(initializer: I, win_value: u32) -> Self {
        Game2048 {
            board: GameBoard::new(BOARD_WIDTH),
            initializer,
            win_value,
        }
    }

    fn add_new_value(&mut self) {
        if let Some((cell, value)) = self.initializer.next_value(&self.board) {
            self.board.set(cell, Some(value));
        }
    }

    /// Slide and merge one line of cells, front first. Returns true if any
    /// cell's value changed.
    fn move_values_in_line(&mut self, line: &[Cell]) -> bool {
        let values: Vec<Option<u32>> = line.iter().map(|&cell| self.board.get(cell).copied()).collect();
        let merged = move_and_merge_equal(&values, |value| value * 2);

        let mut changed = false;
        for (i, &cell) in line.iter().enumerate() {
            let new_value = merged.get(i).copied();
            if self.board.get(cell).copied() != new_value {
                self.board.set(cell, new_value);
                changed = true;
            }
        }
        changed
    }

    /// Slide every line toward `direction`. Returns true if anything moved.
    fn move_values(&mut self, direction: Direction) -> bool {
        let mut moved = false;
        for index in 1..=self.board.width() {
            let line = self.board.line_in_direction(index, direction);
            moved |= self.move_values_in_line(&line);
        }
        moved
    }
}

impl<I: Game2048Initializer> Game for Game2048<I> {
    fn initialize(&mut self) {
        for _ in 0..2 {
            self.add_new_value();
        }
    }

    fn can_move(&self) -> bool {
        self.board.any(|v| v.is_none())
    }

    fn has_won(&self) -> bool {
        self.board.any(|v| v.is_some_and(|&value| value >= self.win_value))
    }

    fn process_move(&mut self, direction: Direction) {
        if self.move_values(direction) {
            self.add_new_value();
        }
    }

    fn get(&self, i: usize, j: usize) -> Option<u32> {
        let cell = self.board.cell_at_or_none(i, j)?;
        self.board.get(cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Places a fixed sequence of (row, col, value) spawns.
    struct ScriptedInitializer {
        spawns: Vec<(usize, usize, u32)>,
        next: usize,
    }

    impl ScriptedInitializer {
        fn new(spawns: Vec<(usize, usize, u32)>) -> Self {
            ScriptedInitializer { spawns, next: 0 }
        }

        fn spawned(&self) -> usize {
            self.next
        }
    }

    impl Game2048Initializer for ScriptedInitializer {
        fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)> {
            if !board.any(|v| v.is_none()) {
                return None;
            }
            let (i, j, value) = *self.spawns.get(self.next)?;
            self.next += 1;
            let cell = board.cell_at(i, j).expect("scripted spawn out of range");
            assert!(board.get(cell).is_none(), "scripted spawn on occupied cell");
            Some((cell, value))
        }
    }

    fn row(game: &Game2048<ScriptedInitializer>, i: usize) -> Vec<Option<u32>> {
        (1..=4).map(|j| game.get(i, j)).collect()
    }

    #[test]
    fn initialize_spawns_two_values() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![(1, 1, 2), (3, 4, 4)]));
        game.initialize();
        assert_eq!(game.get(1, 1), Some(2));
        assert_eq!(game.get(3, 4), Some(4));
        assert_eq!(row(&game, 2), vec![None; 4]);
    }

    #[test]
    fn move_left_slides_and_merges_then_spawns() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![
            (1, 2, 2),
            (1, 3, 2),
            (1, 4, 4),
            (4, 4, 2),
        ]));
        // Row 1 becomes [None, 2, 2, 4].
        for _ in 0..3 {
            game.add_new_value();
        }
        let before = game.initializer.spawned();

        game.process_move(Direction::Left);

        assert_eq!(row(&game, 1), vec![Some(4), Some(4), None, None]);
        assert_eq!(game.initializer.spawned(), before + 1);
        assert_eq!(game.get(4, 4), Some(2));
    }

    #[test]
    fn unchanged_move_spawns_nothing() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![(1, 1, 2), (2, 1, 4)]));
        game.initialize();
        let before = game.initializer.spawned();

        // Everything already sits against the left edge.
        game.process_move(Direction::Left);

        assert_eq!(game.initializer.spawned(), before);
        assert_eq!(game.get(1, 1), Some(2));
        assert_eq!(game.get(2, 1), Some(4));
    }

    #[test]
    fn right_and_down_slide_toward_their_edges() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![(1, 1, 2), (1, 3, 2)]));
        game.initialize();

        game.process_move(Direction::Right);
        assert_eq!(game.get(1, 4), Some(4));

        game.process_move(Direction::Down);
        assert_eq!(game.get(4, 4), Some(4));
        assert_eq!(game.get(1, 4), None);
    }

    #[test]
    fn merge_happens_once_per_move() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![
            (2, 1, 2),
            (2, 2, 2),
            (2, 3, 2),
            (2, 4, 2),
        ]));
        for _ in 0..4 {
            game.add_new_value();
        }
        assert_eq!(row(&game, 2), vec![Some(2), Some(2), Some(2), Some(2)]);

        game.process_move(Direction::Left);
        assert_eq!(row(&game, 2), vec![Some(4), Some(4), None, None]);
    }

    #[test]
    fn has_won_uses_the_threshold() {
        let mut game = Game2048::new(ScriptedInitializer::new(vec![(1, 1, 1024), (1, 2, 2048)]));
        game.initialize();
        assert!(game.has_won());

        let mut small = Game2048::with_win_value(ScriptedInitializer::new(vec![(1, 1, 64)]), 64);
        small.initialize();
        assert!(small.has_won());

        let mut not_yet = Game2048::new(ScriptedInitializer::new(vec![(1, 1, 1024)]));
        not_yet.initialize();
        assert!(!not_yet.has_won());
    }

    #[test]
    fn can_move_only_with_an_empty_cell() {
        let spawns: Vec<(usize, usize, u32)> = (1..=4)
            .flat_map(|i| (1..=4).map(move |j| (i, j, ((i * 4 + j) as u32) * 2)))
            .collect();
        let mut game = Game2048::new(ScriptedInitializer::new(spawns));
        assert!(game.can_move());
        for _ in 0..16 {
            game.add_new_value();
        }
        assert!(!game.can_move());
    }

    #[test]
    fn random_initializer_fills_an_empty_cell() {
        let mut initializer = RandomGame2048Initializer;
        let mut board: GameBoard<u32> = GameBoard::new(4);

        let (cell, value) = initializer.next_value(&board).unwrap();
        assert!(board.get(cell).is_none());
        assert!(value == 2 || value == 4);

        for cell in board.all_cells() {
            board.set(cell, Some(2));
        }
        assert_eq!(initializer.next_value(&board), None);
    }
}
