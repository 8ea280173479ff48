
use super::notate;

use utils::*;

///
/// A player in the marking game.
///
/// There are two players, X and O. X always takes the first turn, and the
/// players then alternate, each claiming one open cell of the grid per
/// turn. Every turn belongs to exactly one of the two.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player
{
    X,
    O
}

impl std::fmt::Display for Player
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self
        {
            Player::X => "X",
            Player::O => "O"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for Player
{
    fn notate (& self) -> String
    {
        match self
        {
            Player::X => "X".to_string(),
            Player::O => "O".to_string()
        }
    }

    fn parse (s: & str) -> Result<Player>
    {
        match s
        {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _         => Err(error::error!("Invalid notation '{}' for player.", s))
        }
    }
}

impl Player
{
    ///
    /// Returns the player opposite this one.
    ///
    pub fn next (& self) -> Player
    {
        match self
        {
            Player::X => Player::O,
            Player::O => Player::X
        }
    }
}
