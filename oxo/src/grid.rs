
use super::cell::Cell;
use super::error::Error;
use super::label;
use super::notate;
use super::notate::Notate;
use super::player::Player;
use super::point::Point;

use utils::error::Context;
use utils::*;

///
/// Represents the playing surface: a square, row-major matrix of cells.
///
/// Every cell is either empty, carrying the unique 1-based label it was
/// seeded with at creation, or marked with a player's symbol. Labels run
/// 1 ..= size² in row-major order and are never reassigned, so a consumed
/// label stays consumed for the rest of the game.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grid
{
    cells: Vec<Vec<Cell>>
}

impl notate::Notate for Grid
{
    fn notate (& self) -> String
    {
        self.cells.iter()
            .map(|row| row.iter().map(|cell| match cell
                {
                    Cell::Empty(_)       => ".".to_string(),
                    Cell::Marked(player) => player.notate()
                })
                .collect::<String>())
            .collect::<Vec<String>>()
            .join("/")
    }

    fn parse (s: & str) -> Result<Grid>
    {
        let context = format!("Invalid notation '{}' for grid.", s);

        // A position is one row per '/'-separated run, one character per cell,
        // and must be square.

        let rows = s.split('/').collect::<Vec<& str>>();
        let size = rows.len();

        let mut cells : Vec<Vec<Cell>> = Vec::new();
        for (row, notation) in rows.iter().enumerate()
        {
            match notation.chars().count()
            {
                n if n == size => {},
                n              => return Err(error::error!("Expected {} cells in row {}, found {}.", size, row, n)).context(context.clone())
            };

            let mut line : Vec<Cell> = Vec::new();
            for (col, token) in notation.chars().enumerate()
            {
                let cell = match token
                {
                    '.' | '_' | ',' => Cell::Empty(label::positional(size, row, col)),
                    _               => Cell::Marked(Player::parse(& token.to_string()).context(context.clone())?)
                };
                line.push(cell);
            }
            cells.push(line);
        }

        Ok(Grid { cells })
    }
}

impl std::fmt::Display for Grid
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for row in & self.cells
        {
            for cell in row
            {
                write!(f, "{:>2} ", cell.to_string())?;
            }
            write!(f, "\n")?;
        }

        Ok(())
    }
}

impl Grid
{
    ///
    /// Returns the cell at the given point.
    ///
    pub fn at (& self, point: & Point) -> Cell
    {
        self.cells[point.row()][point.col()]
    }

    ///
    /// Determines whether every cell on this grid has been marked.
    ///
    pub fn is_full (& self) -> bool
    {
        self.cells.iter().all(|row| row.iter().all(|cell| cell.marker().is_some()))
    }

    ///
    /// Marks the cell at the given point for the given player, provided the
    /// cell is still open. Marking an occupied cell is rejected and leaves
    /// the grid untouched.
    ///
    pub fn mark (& mut self, point: & Point, player: & Player) -> Result<(), Error>
    {
        match self.at(point)
        {
            Cell::Marked(_) => Err(Error::CellOccupied(* point)),
            Cell::Empty(_)  =>
            {
                self.cells[point.row()][point.col()] = Cell::Marked(* player);
                Ok(())
            }
        }
    }

    ///
    /// Returns a fresh grid of the given size with every cell open, seeded
    /// with the labels 1 ..= size² in row-major order.
    ///
    pub fn new (size: usize) -> Grid
    {
        let mut cells : Vec<Vec<Cell>> = Vec::new();

        for row in 0 .. size
        {
            let mut line : Vec<Cell> = Vec::new();
            for col in 0 .. size
            {
                line.push(Cell::Empty(label::positional(size, row, col)));
            }
            cells.push(line);
        }

        Grid { cells }
    }

    ///
    /// Returns the side length of this grid.
    ///
    pub fn size (& self) -> usize
    {
        self.cells.len()
    }
}
