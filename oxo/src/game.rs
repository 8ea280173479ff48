
use super::error::Error;
use super::grid::Grid;
use super::label;
use super::lines;
use super::outcome::Outcome;
use super::player::Player;

///
/// The side length of the played grid.
///
pub const SIZE : usize = 3;

///
/// A structure that wraps a grid into a full game of the marking game,
/// alternating turns between the two players and surveying the grid after
/// every accepted move.
///
/// The game advances one submitted label at a time. A label that resolves
/// to an open cell marks it for the player to move; a label that does not
/// is rejected without consuming the turn, so the same player is asked
/// again. Once the survey settles on a winner or a draw the game is over
/// and ignores anything further.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Game
{
    // State.

    grid: Grid,
    outcome: Outcome,

    // The player whose next submitted label is applied.

    to_move: Player
}

impl Game
{
    ///
    /// Applies one submitted label to the game.
    ///
    /// The text is trimmed, resolved to a coordinate, and marked for the
    /// player to move, and the grid is then surveyed. The turn passes only
    /// when the mark succeeded and the game did not settle; a rejection is
    /// returned to the caller with the game untouched. Applying a label to
    /// a settled game is a no-op that returns the standing outcome.
    ///
    pub fn apply (& mut self, text: & str) -> Result<Outcome, Error>
    {
        if self.outcome.is_over()
        {
            return Ok(self.outcome);
        }

        let point = label::resolve(& self.grid, text.trim())?;
        self.grid.mark(& point, & self.to_move)?;

        self.outcome = lines::survey(& self.grid);
        if ! self.outcome.is_over()
        {
            self.to_move = self.to_move.next();
        }

        Ok(self.outcome)
    }

    ///
    /// Returns the current state of the grid.
    ///
    pub fn grid (& self) -> & Grid
    {
        & self.grid
    }

    ///
    /// Returns a fresh game on a blank grid, with X to move.
    ///
    pub fn new () -> Game
    {
        Game
        {
            grid: Grid::new(SIZE),
            outcome: Outcome::InProgress,
            to_move: Player::X
        }
    }

    ///
    /// Returns the most recent outcome.
    ///
    pub fn outcome (& self) -> Outcome
    {
        self.outcome
    }

    ///
    /// Determines the next player to move in this game.
    ///
    pub fn to_move (& self) -> Player
    {
        self.to_move
    }
}
