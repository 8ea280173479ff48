
use super::cell::Cell;
use super::grid::Grid;
use super::outcome::Outcome;
use super::player::Player;
use super::point::Point;

///
/// Scans every column of the grid for a completed line.
///
pub fn scan_columns (grid: & Grid) -> Outcome
{
    let size = grid.size();

    for col in 0 .. size
    {
        let line = (0 .. size).map(|row| grid.at(& Point::new(row, col))).collect::<Vec<Cell>>();
        if let Some(winner) = streak_winner(& line)
        {
            return Outcome::Won(winner);
        }
    }

    Outcome::InProgress
}

///
/// Scans the two main diagonals of the grid for a completed line.
///
pub fn scan_diagonals (grid: & Grid) -> Outcome
{
    let size = grid.size();

    let main = (0 .. size).map(|i| grid.at(& Point::new(i, i))).collect::<Vec<Cell>>();
    let anti = (0 .. size).map(|i| grid.at(& Point::new(i, size - 1 - i))).collect::<Vec<Cell>>();

    for line in [main, anti]
    {
        if let Some(winner) = streak_winner(& line)
        {
            return Outcome::Won(winner);
        }
    }

    Outcome::InProgress
}

///
/// Scans every row of the grid for a completed line.
///
pub fn scan_rows (grid: & Grid) -> Outcome
{
    let size = grid.size();

    for row in 0 .. size
    {
        let line = (0 .. size).map(|col| grid.at(& Point::new(row, col))).collect::<Vec<Cell>>();
        if let Some(winner) = streak_winner(& line)
        {
            return Outcome::Won(winner);
        }
    }

    Outcome::InProgress
}

///
/// Walks one line of cells under the streak rule shared by all three scans:
/// remember the previous cell's marker, count every step whose marker equals
/// a previous non-empty marker, and declare the final marker the winner when
/// the count reaches the line's length less one. An empty cell breaks the
/// streak, so only a line marked end to end by one player wins.
///
fn streak_winner (line: & [Cell]) -> Option<Player>
{
    let mut count = 0;
    let mut streak : Option<Player> = None;

    for cell in line
    {
        let marker = cell.marker();
        if marker.is_some() && marker == streak
        {
            count += 1;
        }
        streak = marker;
    }

    match streak
    {
        Some(winner) if count + 1 == line.len() => Some(winner),
        _                                       => None
    }
}

///
/// Surveys the grid for an outcome: rows first, then columns, then the two
/// diagonals, then the draw check. The first completed line settles the
/// survey, and a full grid without one is a draw.
///
pub fn survey (grid: & Grid) -> Outcome
{
    let rows = scan_rows(grid);
    if rows.is_over()
    {
        return rows;
    }

    let columns = scan_columns(grid);
    if columns.is_over()
    {
        return columns;
    }

    let diagonals = scan_diagonals(grid);
    if diagonals.is_over()
    {
        return diagonals;
    }

    match grid.is_full()
    {
        true  => Outcome::Draw,
        false => Outcome::InProgress
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::notate::Notate;

    fn position (s: & str) -> Grid
    {
        Grid::parse(s).unwrap()
    }

    #[test]
    fn a_blank_grid_is_in_progress ()
    {
        let grid = Grid::new(3);

        assert_eq!(scan_rows(& grid), Outcome::InProgress);
        assert_eq!(scan_columns(& grid), Outcome::InProgress);
        assert_eq!(scan_diagonals(& grid), Outcome::InProgress);
        assert_eq!(survey(& grid), Outcome::InProgress);
    }

    #[test]
    fn a_completed_row_wins ()
    {
        let grid = position("OO./XXX/...");

        assert_eq!(scan_rows(& grid), Outcome::Won(Player::X));
        assert_eq!(survey(& grid), Outcome::Won(Player::X));
    }

    #[test]
    fn a_completed_column_wins ()
    {
        let grid = position("OX./OX./O.X");

        assert_eq!(scan_rows(& grid), Outcome::InProgress);
        assert_eq!(scan_columns(& grid), Outcome::Won(Player::O));
        assert_eq!(survey(& grid), Outcome::Won(Player::O));
    }

    #[test]
    fn a_completed_main_diagonal_wins ()
    {
        let grid = position("XO./OX./..X");

        assert_eq!(scan_diagonals(& grid), Outcome::Won(Player::X));
        assert_eq!(survey(& grid), Outcome::Won(Player::X));
    }

    #[test]
    fn a_completed_anti_diagonal_wins ()
    {
        let grid = position("O.X/.X./X.O");

        assert_eq!(scan_diagonals(& grid), Outcome::Won(Player::X));
        assert_eq!(survey(& grid), Outcome::Won(Player::X));
    }

    #[test]
    fn an_incomplete_line_does_not_win ()
    {
        let grid = position("XX./OO./...");

        assert_eq!(scan_rows(& grid), Outcome::InProgress);
        assert_eq!(scan_columns(& grid), Outcome::InProgress);
        assert_eq!(scan_diagonals(& grid), Outcome::InProgress);
        assert_eq!(survey(& grid), Outcome::InProgress);
    }

    #[test]
    fn a_full_grid_without_a_line_is_a_draw ()
    {
        let grid = position("XOX/XOX/OXO");

        assert_eq!(scan_rows(& grid), Outcome::InProgress);
        assert_eq!(scan_columns(& grid), Outcome::InProgress);
        assert_eq!(scan_diagonals(& grid), Outcome::InProgress);
        assert_eq!(survey(& grid), Outcome::Draw);
    }

    #[test]
    fn a_completed_line_takes_precedence_over_fullness ()
    {
        let grid = position("XXX/OOX/OXO");

        assert!(grid.is_full());
        assert_eq!(survey(& grid), Outcome::Won(Player::X));
    }

    #[test]
    fn one_open_cell_keeps_the_game_in_progress ()
    {
        let grid = position("XOX/XOX/O.O");

        assert_eq!(survey(& grid), Outcome::InProgress);
    }

    #[test]
    fn streaks_reset_on_an_open_cell ()
    {
        let x = Cell::Marked(Player::X);
        let open = Cell::Empty(1);

        assert_eq!(streak_winner(& [x, x, open]), None);
        assert_eq!(streak_winner(& [x, open, x]), None);
        assert_eq!(streak_winner(& [open, x, x]), None);
        assert_eq!(streak_winner(& [x, x, x]), Some(Player::X));
    }

    #[test]
    fn mixed_markers_never_win ()
    {
        let x = Cell::Marked(Player::X);
        let o = Cell::Marked(Player::O);

        assert_eq!(streak_winner(& [x, o, o]), None);
        assert_eq!(streak_winner(& [x, x, o]), None);
        assert_eq!(streak_winner(& [o, x, o]), None);
    }
}
