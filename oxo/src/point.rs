
use utils::*;

///
/// A grid coordinate, as a 0-indexed row and column pair.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point
{
    row: usize,
    col: usize
}

impl std::fmt::Display for Point
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Point
{
    ///
    /// Returns the column index.
    ///
    pub fn col (& self) -> usize
    {
        self.col
    }

    ///
    /// Returns a new point.
    ///
    pub fn new (row: usize, col: usize) -> Point
    {
        Point { row, col }
    }

    ///
    /// Returns the row index.
    ///
    pub fn row (& self) -> usize
    {
        self.row
    }
}
