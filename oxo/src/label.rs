
use super::cell::Cell;
use super::error::Error;
use super::grid::Grid;
use super::point::Point;

///
/// Returns the label seeded at the given position on a grid of the given
/// size. Positions are labelled 1 ..= size² in row-major order.
///
pub fn positional (size: usize, row: usize, col: usize) -> u32
{
    (row * size + col + 1) as u32
}

///
/// Resolves a submitted label to the coordinate of the open cell carrying it.
///
/// Text that does not parse as an unsigned numeral is rejected before the
/// grid is consulted at all. A parsed label is then sought among the open
/// cells in row-major order. When no open cell carries it, the failure is
/// explicit: a label whose cell has already been marked reports the occupied
/// coordinate, and a label this grid never seeded reports not-found. No
/// branch falls back to a default coordinate.
///
pub fn resolve (grid: & Grid, text: & str) -> Result<Point, Error>
{
    let label = match text.parse::<u32>()
    {
        Ok(label) => label,
        Err(_)    => return Err(Error::InvalidLabel(text.to_owned()))
    };

    let mut occupied : Option<Point> = None;
    for row in 0 .. grid.size()
    {
        for col in 0 .. grid.size()
        {
            let point = Point::new(row, col);
            match grid.at(& point)
            {
                Cell::Empty(seed) if seed == label                            => return Ok(point),
                Cell::Marked(_) if positional(grid.size(), row, col) == label => occupied = Some(point),
                _                                                             => {}
            };
        }
    }

    match occupied
    {
        Some(point) => Err(Error::CellOccupied(point)),
        None        => Err(Error::LabelNotFound(label))
    }
}
