use crate::board::Direction;

/// Facade consumed by a rendering front end. Implementations own their board;
/// the front end only reads values and feeds in move directions.
pub trait Game {
    /// Put the board into its starting position.
    fn initialize(&mut self);

    fn can_move(&self) -> bool;

    fn has_won(&self) -> bool;

    /// Apply one user move. Moves that change nothing are silent no-ops.
    fn process_move(&mut self, direction: Direction);

    /// Value at (i, j), `None` for an empty cell or out-of-range coordinates.
    fn get(&self, i: usize, j: usize) -> Option<u32>;
}
