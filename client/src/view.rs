
use std::io::Write;

use colored::Colorize;

use oxo::notate::Notate;
use oxo::{Cell, Error, Grid, Outcome, Player, Point, Presenter};

use utils::*;

///
/// The control sequence that homes the cursor and clears the screen.
///
const CLEAR_SCREEN : & str = "\x1b[H\x1b[J";

///
/// A presenter that draws the game on an ANSI terminal.
///
/// Every frame clears the screen and redraws the whole grid, open cells
/// showing their label and marked cells showing the player's symbol, X in
/// red and O in blue when colour is on. A rejection is kept until the next
/// frame and printed under the grid, where it survives the redraw long
/// enough to be read.
///
pub struct View
{
    colour: bool,
    notice: Option<String>
}

impl Presenter for View
{
    fn conclude (& mut self, outcome: & Outcome)
    {
        println!("{}", outcome);
        log::info!("Concluded: {}", outcome);
    }

    fn prompt (& mut self, to_move: & Player)
    {
        print!("Enter a position number ({}) >  ", to_move);
        let _ = std::io::stdout().flush();
    }

    fn reject (& mut self, error: & Error)
    {
        log::warn!("Rejected a submitted label: {}", error);
        self.notice = Some(error.to_string());
    }

    fn render (& mut self, grid: & Grid)
    {
        print!("{}", CLEAR_SCREEN);
        print!("{}", self.draw(grid));

        if let Some(notice) = self.notice.take()
        {
            println!("{}", notice);
        }

        log::debug!("Rendered position '{}'.", grid.notate());
    }
}

impl View
{
    ///
    /// Draws the grid into a string: width-2 cells joined by column rules,
    /// with a rule of dashes between consecutive rows.
    ///
    fn draw (& self, grid: & Grid) -> String
    {
        let size = grid.size();

        let mut board = String::new();
        for row in 0 .. size
        {
            let cells = (0 .. size)
                .map(|col| self.paint(& grid.at(& Point::new(row, col))))
                .collect::<Vec<String>>();

            board += & cells.join(" | ");
            board += "\n";

            if row < size - 1
            {
                board += & "-".repeat(5 * size - 3);
                board += "\n";
            }
        }

        board
    }

    ///
    /// Returns a new view.
    ///
    pub fn new (colour: bool) -> View
    {
        View { colour, notice: None }
    }

    ///
    /// Formats one cell, colouring the marks when colour is on.
    ///
    fn paint (& self, cell: & Cell) -> String
    {
        let token = format!("{:>2}", cell.to_string());

        match (self.colour, cell)
        {
            (true, Cell::Marked(Player::X)) => token.red().to_string(),
            (true, Cell::Marked(Player::O)) => token.blue().to_string(),
            _                               => token
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn a_plain_frame_shows_labels_and_marks ()
    {
        let view = View::new(false);
        let grid = Grid::parse("XO./.X./..O").unwrap();

        let expected = " X |  O |  3\n------------\n 4 |  X |  6\n------------\n 7 |  8 |  O\n";

        assert_eq!(view.draw(& grid), expected);
    }

    #[test]
    fn a_fresh_grid_shows_every_label ()
    {
        let view = View::new(false);
        let drawn = view.draw(& Grid::new(3));

        for label in 1 ..= 9
        {
            assert!(drawn.contains(& label.to_string()));
        }
    }
}
