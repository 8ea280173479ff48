
use super::player::Player;

use utils::*;

///
/// One slot of the grid.
///
/// A cell starts out empty, carrying the 1-based positional label players
/// use to address it, and is marked with a player's symbol at most once.
/// A marked cell never reverts, and its label is never reassigned.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell
{
    Empty(u32),
    Marked(Player)
}

impl std::fmt::Display for Cell
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Cell::Empty(label)   => write!(f, "{}", label),
            Cell::Marked(player) => write!(f, "{}", player)
        }
    }
}

impl Cell
{
    ///
    /// Returns the marker on this cell, if any player has claimed it.
    ///
    pub fn marker (& self) -> Option<Player>
    {
        match self
        {
            Cell::Empty(_)       => None,
            Cell::Marked(player) => Some(* player)
        }
    }
}
