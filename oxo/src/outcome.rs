
use super::player::Player;

use utils::*;

///
/// The result of surveying a grid for completed lines.
///
/// An outcome is recomputed from the grid after every accepted move and
/// never drifts from it. Won and Draw are terminal: once either is reached
/// the game accepts no further moves.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome
{
    InProgress,
    Won(Player),
    Draw
}

impl std::fmt::Display for Outcome
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Outcome::InProgress  => write!(f, "The game is in progress."),
            Outcome::Won(player) => write!(f, "{} won the game.", player),
            Outcome::Draw        => write!(f, "The game is a draw.")
        }
    }
}

impl Outcome
{
    ///
    /// Determines whether this outcome ends the game.
    ///
    pub fn is_over (& self) -> bool
    {
        match self
        {
            Outcome::InProgress => false,
            Outcome::Won(_)     => true,
            Outcome::Draw       => true
        }
    }
}
