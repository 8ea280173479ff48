
use super::error::Error;
use super::game::Game;
use super::grid::Grid;
use super::outcome::Outcome;
use super::player::Player;

///
/// A sink for everything the players see.
///
/// The session never prints anything itself; it hands the grid, the
/// prompts, the rejections, and the final outcome to its presenter. A
/// presenter must at least let open cells show their label and marked
/// cells show their player's symbol, or the players cannot tell what is
/// left to claim.
///
pub trait Presenter
{
    ///
    /// Reports the final outcome of a settled game.
    ///
    fn conclude (& mut self, outcome: & Outcome);

    ///
    /// Asks the given player to submit a label.
    ///
    fn prompt (& mut self, to_move: & Player);

    ///
    /// Reports a rejected label; the same player is prompted again next.
    ///
    fn reject (& mut self, error: & Error);

    ///
    /// Shows the current grid.
    ///
    fn render (& mut self, grid: & Grid);
}

///
/// A source of submitted lines, one per prompt.
///
pub trait Reader
{
    ///
    /// Produces the next line of raw text, or None once no more input is
    /// available.
    ///
    fn next_line (& mut self) -> Option<String>;
}

///
/// Drives one full game over a presenter and a reader.
///
/// The session owns the game exclusively and processes one line to
/// completion before asking for the next, so no turn ever interleaves
/// with another. Nothing here blocks beyond the reader itself.
///
pub struct Session<P, R>
    where P: Presenter, R: Reader
{
    game: Game,
    presenter: P,
    reader: R
}

impl<P, R> Session<P, R>
    where P: Presenter, R: Reader
{
    ///
    /// Returns the game this session drives.
    ///
    pub fn game (& self) -> & Game
    {
        & self.game
    }

    ///
    /// Returns a new session over a fresh game.
    ///
    pub fn new (presenter: P, reader: R) -> Session<P, R>
    {
        Session { game: Game::new(), presenter, reader }
    }

    ///
    /// Returns the presenter this session reports to.
    ///
    pub fn presenter (& self) -> & P
    {
        & self.presenter
    }

    ///
    /// Runs the game to its end.
    ///
    /// Every iteration renders the grid first. A settled game is concluded
    /// and the loop stops; otherwise the player to move is prompted and the
    /// next line is requested. A rejected label is reported and consumes no
    /// turn. When the reader runs out of input the loop stops silently,
    /// with no transition and no concluding message.
    ///
    pub fn run_loop (& mut self)
    {
        loop
        {
            self.presenter.render(self.game.grid());

            if self.game.outcome().is_over()
            {
                self.presenter.conclude(& self.game.outcome());
                break;
            }

            self.presenter.prompt(& self.game.to_move());

            let line = match self.reader.next_line()
            {
                Some(line) => line,
                None       => break
            };

            match self.game.apply(& line)
            {
                Ok(_)      => {},
                Err(error) => self.presenter.reject(& error)
            };
        }
    }
}
