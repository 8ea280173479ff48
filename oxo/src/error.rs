
use super::point::Point;

///
/// The ways a submitted label can be rejected.
///
/// Every rejection refuses a single attempt and leaves the game exactly as
/// it was, so the same player is asked again. No rejection ends the game.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error
{
    #[error("Invalid label '{0}'.")]
    InvalidLabel(String),

    #[error("No cell is labelled '{0}'.")]
    LabelNotFound(u32),

    #[error("The cell at {0} is already marked.")]
    CellOccupied(Point)
}
